use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use models::policy;

/// Create a policy; the name must not collide with an existing one.
#[instrument(skip(db, input), fields(policy_name = %input.policy_name))]
pub async fn create_policy(db: &DatabaseConnection, input: policy::NewPolicy) -> Result<policy::Model, ServiceError> {
    policy::validate_policy_name(&input.policy_name)?;
    if policy::find_by_name(db, &input.policy_name).await?.is_some() {
        return Err(ServiceError::Conflict("Policy name already exists".into()));
    }
    let created = policy::create(db, input).await?;
    info!(policy_id = created.policy_id, "policy_created");
    Ok(created)
}

pub async fn get_policy(db: &DatabaseConnection, id: i32) -> Result<Option<policy::Model>, ServiceError> {
    policy::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_policy(
    db: &DatabaseConnection,
    id: i32,
    patch: policy::PolicyPatch,
) -> Result<Option<policy::Model>, ServiceError> {
    Ok(policy::update(db, id, patch).await?)
}

pub async fn delete_policy(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    Ok(policy::delete(db, id).await?)
}

/// List policies page by page, with totals for the response envelope.
pub async fn list_policies_paginated(db: &DatabaseConnection, opts: Pagination) -> Result<Page<policy::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let paginator = policy::Entity::find().paginate(db, per_page);
    let counts = paginator
        .num_items_and_pages()
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page { items, pages: counts.number_of_pages, total: counts.number_of_items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn sample(name: String) -> policy::NewPolicy {
        policy::NewPolicy {
            policy_name: name,
            description: None,
            coverage_amount: Decimal::new(50_000_00, 2),
            premium_amount: Decimal::new(80_00, 2),
            policy_type_id: 1,
            insured_id: 1,
        }
    }

    #[tokio::test]
    async fn policy_name_collision_is_rejected() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_policy_{}", Uuid::new_v4());
        let p = create_policy(&db, sample(name.clone())).await?;

        let dup = create_policy(&db, sample(name)).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        assert!(delete_policy(&db, p.policy_id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn policy_pagination_counts() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let mut ids = vec![];
        for _ in 0..3 {
            let p = create_policy(&db, sample(format!("svc_policy_{}", Uuid::new_v4()))).await?;
            ids.push(p.policy_id);
        }

        let page = list_policies_paginated(&db, Pagination { page: 1, per_page: 2 }).await?;
        assert!(page.items.len() <= 2);
        assert!(page.total >= 3);

        for id in ids {
            delete_policy(&db, id).await?;
        }
        Ok(())
    }
}
