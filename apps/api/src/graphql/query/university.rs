//! University queries for the campus GraphQL API

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::context::{parse_id, student_client};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::University;

pub const DOMAIN: RootDomain = RootDomain {
    name: "UniversityQuery",
    fields: &[
        "university",
        "universities",
        "searchUniversities",
        "universitiesByLocation",
    ],
};

/// University lookups, served by the student service
#[derive(Default)]
pub struct UniversityQuery;

#[Object]
impl UniversityQuery {
    /// Get a university by ID
    async fn university(&self, ctx: &Context<'_>, id: ID) -> Result<Option<University>> {
        let id = parse_id("university", &id)?;
        let university = student_client(ctx)?
            .get_university(id)
            .await
            .or_degraded("get_university");
        Ok(university.map(University::from))
    }

    /// List all universities
    async fn universities(&self, ctx: &Context<'_>) -> Result<Vec<University>> {
        let universities = student_client(ctx)?
            .list_universities()
            .await
            .or_degraded("list_universities");
        Ok(universities.into_iter().map(University::from).collect())
    }

    /// Search universities by name
    async fn search_universities(&self, ctx: &Context<'_>, name: String) -> Result<Vec<University>> {
        let universities = student_client(ctx)?
            .search_universities(&name)
            .await
            .or_degraded("search_universities");
        Ok(universities.into_iter().map(University::from).collect())
    }

    async fn universities_by_location(
        &self,
        ctx: &Context<'_>,
        location: String,
    ) -> Result<Vec<University>> {
        let universities = student_client(ctx)?
            .list_universities_by_location(&location)
            .await
            .or_degraded("list_universities_by_location");
        Ok(universities.into_iter().map(University::from).collect())
    }
}
