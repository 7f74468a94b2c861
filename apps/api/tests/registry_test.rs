//! Checks that the declared root fields of every resolver domain match the
//! schema async-graphql actually generates.

use std::collections::BTreeSet;

use async_graphql::{EmptySubscription, Schema};
use campus_api::graphql::mutation::{Mutation, MUTATION_DOMAINS};
use campus_api::graphql::query::{Query, QUERY_DOMAINS};
use campus_api::graphql::registry::{check_disjoint, declared_fields, RootDomain};

/// Root field names as reported by introspection, keyed by `queryType` or
/// `mutationType`
async fn introspected_fields(root: &str) -> BTreeSet<String> {
    let schema = Schema::build(Query::default(), Mutation::default(), EmptySubscription).finish();
    let response = schema
        .execute("{ __schema { queryType { fields { name } } mutationType { fields { name } } } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    data["__schema"][root]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|field| field["name"].as_str().map(str::to_string))
        .collect()
}

fn declared(domains: &[RootDomain]) -> BTreeSet<String> {
    declared_fields(domains)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_domains_are_disjoint() {
    assert!(check_disjoint("Query", QUERY_DOMAINS).is_ok());
    assert!(check_disjoint("Mutation", MUTATION_DOMAINS).is_ok());
}

#[tokio::test]
async fn test_query_declarations_match_schema() {
    assert_eq!(introspected_fields("queryType").await, declared(QUERY_DOMAINS));
}

#[tokio::test]
async fn test_mutation_declarations_match_schema() {
    assert_eq!(
        introspected_fields("mutationType").await,
        declared(MUTATION_DOMAINS)
    );
}

#[test]
fn test_declared_fields_include_relationship_roots() {
    assert!(declared(QUERY_DOMAINS).contains("courseWithStudents"));
    assert!(declared(MUTATION_DOMAINS).contains("enrollStudent"));
}
