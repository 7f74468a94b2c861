//! Root field ownership across resolver domains
//!
//! Each domain declares the root fields it owns. The schema builder refuses to
//! build when two declarations overlap.

use std::collections::HashMap;

use thiserror::Error;

/// Root fields owned by one resolver domain
#[derive(Debug, Clone, Copy)]
pub struct RootDomain {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{root} field `{field}` is declared by both {first} and {second}")]
    DuplicateRootField {
        root: &'static str,
        field: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// Check that no root field of `root` is declared by two domains
pub fn check_disjoint(root: &'static str, domains: &[RootDomain]) -> Result<(), RegistryError> {
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    for domain in domains {
        for &field in domain.fields {
            if let Some(first) = owners.insert(field, domain.name) {
                return Err(RegistryError::DuplicateRootField {
                    root,
                    field,
                    first,
                    second: domain.name,
                });
            }
        }
    }

    Ok(())
}

/// All root field names declared across `domains`
pub fn declared_fields(domains: &[RootDomain]) -> Vec<&'static str> {
    domains.iter().flat_map(|d| d.fields.iter().copied()).collect()
}
