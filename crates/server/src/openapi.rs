use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct NewPolicyRequest {
    pub policy_name: String,
    pub description: Option<String>,
    pub coverage_amount: String,
    pub premium_amount: String,
    pub policy_type_id: i32,
    pub insured_id: i32,
}

/// Documented subset: health plus the two enriched resources.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::users::login,
        crate::routes::policies::list_policies,
        crate::routes::policies::create_policy,
        crate::routes::policies::get_policy,
        crate::routes::policies::update_policy,
        crate::routes::policies::delete_policy,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            RegisterUserRequest,
            LoginRequest,
            NewPolicyRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "policies")
    )
)]
pub struct ApiDoc;
