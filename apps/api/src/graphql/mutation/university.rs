//! University mutations for the campus GraphQL API

use async_graphql::{Context, InputObject, Object, Result, ID};
use campus_service_clients::UniversityDraft;

use crate::graphql::context::{parse_id, student_client};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::University;

pub const DOMAIN: RootDomain = RootDomain {
    name: "UniversityMutation",
    fields: &["createUniversity", "updateUniversity", "deleteUniversity"],
};

#[derive(Debug, InputObject)]
pub struct UniversityInput {
    pub name: String,
    pub location: Option<String>,
}

impl From<UniversityInput> for UniversityDraft {
    fn from(input: UniversityInput) -> Self {
        Self {
            name: input.name,
            location: input.location,
        }
    }
}

#[derive(Default)]
pub struct UniversityMutation;

#[Object]
impl UniversityMutation {
    async fn create_university(
        &self,
        ctx: &Context<'_>,
        input: UniversityInput,
    ) -> Result<University> {
        let university = student_client(ctx)?
            .create_university(&input.into())
            .await
            .or_failure("Failed to create university")?;
        Ok(university.into())
    }

    async fn update_university(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UniversityInput,
    ) -> Result<University> {
        let id = parse_id("university", &id)?;
        let university = student_client(ctx)?
            .update_university(id, &input.into())
            .await
            .or_failure("Failed to update university")?;
        Ok(university.into())
    }

    async fn delete_university(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id("university", &id)?;
        student_client(ctx)?
            .delete_university(id)
            .await
            .or_failure("Failed to delete university")?;
        Ok(true)
    }
}
