//! The Snipe-IT import schema

/// Column order the Snipe-IT importer is configured for. The output file
/// must carry all of them, in this order, even when no assets survive.
pub const CSV_HEADERS: [&str; 19] = [
    "Full Name",
    "Email",
    "Username",
    "item Name",
    "Category",
    "Model name",
    "Manufacturer",
    "Model Number",
    "Serial number",
    "Asset Tag",
    "Location",
    "Notes",
    "Purchase Date",
    "Purchase Cost",
    "Company",
    "Status",
    "Warranty",
    "Supplier",
    "BoxName",
];

/// One row of the import file.
///
/// Only five fields ever carry data here; the rest exist because the
/// importer expects every column present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRecord {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub item_name: String,
    pub category: String,
    pub model_name: String,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub location: String,
    pub notes: String,
    pub purchase_date: String,
    pub purchase_cost: String,
    pub company: String,
    pub status: String,
    pub warranty: String,
    pub supplier: String,
    pub box_name: String,
}

impl AssetRecord {
    /// Cell values in [`CSV_HEADERS`] order.
    pub fn fields(&self) -> [&str; 19] {
        [
            self.full_name.as_str(),
            self.email.as_str(),
            self.username.as_str(),
            self.item_name.as_str(),
            self.category.as_str(),
            self.model_name.as_str(),
            self.manufacturer.as_str(),
            self.model_number.as_str(),
            self.serial_number.as_str(),
            self.asset_tag.as_str(),
            self.location.as_str(),
            self.notes.as_str(),
            self.purchase_date.as_str(),
            self.purchase_cost.as_str(),
            self.company.as_str(),
            self.status.as_str(),
            self.warranty.as_str(),
            self.supplier.as_str(),
            self.box_name.as_str(),
        ]
    }
}
