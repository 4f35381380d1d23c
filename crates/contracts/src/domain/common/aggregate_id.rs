/// Trait for strongly-typed aggregate identifiers.
///
/// Every aggregate id is a newtype over `Uuid`; the string form is what
/// travels over the wire and is stored in the database.
pub trait AggregateId: Sized {
    /// String form of the id (UUID text representation)
    fn as_string(&self) -> String;

    /// Parse the id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}
