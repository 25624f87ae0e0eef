/// Supplies a placeholder value for a type name.
///
/// [`Outcome::unwrap_or_default`](crate::Outcome::unwrap_or_default) calls this on
/// `Failure`, passing the error's type name. Returning `None` means there is no
/// mapping for that name.
///
/// Any `Fn(&str) -> Option<T>` closure is a provider.
///
/// # Examples
///
/// ```
/// use throwless::traits::DefaultValueProvider;
///
/// struct Zeroes;
///
/// impl DefaultValueProvider<u64> for Zeroes {
///     fn default_value(&self, type_name: &str) -> Option<u64> {
///         type_name.starts_with('u').then_some(0)
///     }
/// }
///
/// assert_eq!(Zeroes.default_value("u16"), Some(0));
/// assert_eq!(Zeroes.default_value("bool"), None);
/// ```
pub trait DefaultValueProvider<T> {
    fn default_value(&self, type_name: &str) -> Option<T>;
}

impl<T, F> DefaultValueProvider<T> for F
where
    F: Fn(&str) -> Option<T>,
{
    #[inline]
    fn default_value(&self, type_name: &str) -> Option<T> {
        self(type_name)
    }
}
