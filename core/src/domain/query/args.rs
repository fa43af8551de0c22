use std::collections::{BTreeMap, btree_map};

use super::filter::{Filter, FilterValue};

/// The optional query parameters that were actually supplied by the caller.
///
/// Absent values are dropped, and so are empty strings: `?name=` behaves the
/// same as leaving `name` out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuppliedArgs(BTreeMap<String, FilterValue>);

impl SuppliedArgs {
    pub fn collect<I, K>(args: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<FilterValue>)>,
        K: Into<String>,
    {
        let supplied = args
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(value) if !value.is_blank() => Some((name.into(), value)),
                _ => None,
            })
            .collect();

        Self(supplied)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FilterValue> {
        self.0.iter()
    }

    /// Equality conjunction over every supplied argument.
    pub fn into_filter(self) -> Filter {
        Filter::and(
            self.0
                .into_iter()
                .map(|(field, value)| Filter::Eq(field, value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_supplied_values() {
        let args = SuppliedArgs::collect([
            ("room_name", Some(FilterValue::from("504"))),
            ("url", None),
            ("camera_ip", Some(FilterValue::from("172.18.191.21"))),
        ]);

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("room_name"), Some(&FilterValue::from("504")));
        assert!(args.get("url").is_none());
    }

    #[test]
    fn empty_strings_count_as_not_supplied() {
        let args = SuppliedArgs::collect([
            ("name", Some(FilterValue::from(""))),
            ("type", Some(FilterValue::from("  "))),
        ]);

        assert!(args.is_empty());
        assert!(args.into_filter().is_all());
    }

    #[test]
    fn non_string_values_are_never_blank() {
        let args = SuppliedArgs::collect([
            ("ruz_lesson_oid", Some(FilterValue::from(0))),
            ("active", Some(FilterValue::from(false))),
        ]);

        assert_eq!(args.len(), 2);
    }

    #[test]
    fn builds_equality_conjunction() {
        let filter = SuppliedArgs::collect([
            ("name", Some(FilterValue::from("Cam1"))),
            ("type", Some(FilterValue::from("ONVIF"))),
        ])
        .into_filter();

        assert_eq!(
            filter,
            Filter::And(vec![Filter::eq("name", "Cam1"), Filter::eq("type", "ONVIF")])
        );
    }
}
