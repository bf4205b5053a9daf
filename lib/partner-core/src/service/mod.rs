pub mod document;
pub mod error;
pub mod partner;
pub mod partner_lookup;

#[cfg(test)]
pub(crate) mod test_utilities;
