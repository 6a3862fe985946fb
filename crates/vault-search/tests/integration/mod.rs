mod end_to_end;
mod panel_walkthrough;
