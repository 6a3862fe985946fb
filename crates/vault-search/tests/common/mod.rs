//! Shared fixtures for the search integration tests.

use vault_core::Item;

/// The two-item collection used by the end-to-end walkthrough.
pub fn passport_and_payslip() -> Vec<Item> {
    vec![
        Item::text("1").with_title("Passport").with_keywords(["admin/id"]),
        Item::text("2").with_title("Payslip").with_keywords(["work/pay"]),
    ]
}

/// A larger vault with nested keywords, shared prefixes, and one untagged
/// item.
pub fn household() -> Vec<Item> {
    vec![
        Item::text("passport")
            .with_title("Passeport")
            .with_content("Numéro XX123456")
            .with_keywords(["administratif/papier/passport", "voyage"]),
        Item::text("carte-grise")
            .with_title("Carte grise")
            .with_keywords(["administratif/papier/voiture", "voiture"]),
        Item::text("rib")
            .with_title("RIB")
            .with_content("FR76 ...")
            .with_keywords(["administratif/banque"]),
        Item::text("contract")
            .with_title("Contrat de travail")
            .with_keywords(["work/contract"]),
        Item::text("invoice")
            .with_title("Facture mars")
            .with_keywords(["work/invoice", " work / invoice "]),
        Item::text("wifi").with_title("Code wifi").with_content("hunter2"),
    ]
}

/// Ids of a visible item list, in order.
pub fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}
