/// An API key taken from an `Authorization: ApiKey <token>` header.
///
/// Only the header syntax has been checked; the key itself has not been
/// validated against any credential store.
pub type ApiKey = String;
