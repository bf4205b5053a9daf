use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    pub schema_id: String,
    pub label: Option<String>,
    pub schema_attribute_names: BTreeSet<String>,
}
