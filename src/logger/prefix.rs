use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::logger::severity::Severity;

pub type PrefixTable = HashMap<Severity, &'static str>;

/// Severity to display prefix. Built once on first lookup and never mutated.
static PREFIXES: Lazy<PrefixTable> = Lazy::new(|| {
    Severity::ALL
        .iter()
        .map(|severity| (*severity, severity.prefix()))
        .collect()
});

/// The process-wide prefix table.
pub fn prefixes() -> &'static PrefixTable {
    &PREFIXES
}

/// Returns the prefix registered for `severity`, if any.
pub fn prefix_for(severity: Severity) -> Option<&'static str> {
    PREFIXES.get(&severity).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_a_prefix() {
        assert_eq!(PREFIXES.len(), Severity::ALL.len());
        for severity in Severity::ALL {
            assert_eq!(prefix_for(severity), Some(severity.prefix()));
        }
    }

    #[test]
    fn test_repeated_lookups_return_the_same_string() {
        let first = prefix_for(Severity::Warning).unwrap();
        let second = prefix_for(Severity::Warning).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_table_is_shared_across_threads() {
        let handles: Vec<_> = Severity::ALL
            .into_iter()
            .map(|severity| std::thread::spawn(move || prefix_for(severity)))
            .collect();

        for (handle, severity) in handles.into_iter().zip(Severity::ALL) {
            assert_eq!(handle.join().unwrap(), Some(severity.prefix()));
        }
    }
}
