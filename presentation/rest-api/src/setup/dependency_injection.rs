use std::sync::Arc;

use logger::TracingLogger;
use persistence::profile::repository::ProfileRepositoryPostgres;
use persistence::shopping_item::repository::ShoppingItemRepositoryPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;

use auth::client::IdentityClient;
use auth::gateway::IdentityAuthGateway;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::profile::get::GetProfileUseCaseImpl;
use business::application::profile::set_theme::SetThemeUseCaseImpl;
use business::application::profile::update_name::UpdateProfileNameUseCaseImpl;
use business::application::shopping_item::add::AddShoppingItemUseCaseImpl;
use business::application::shopping_item::remove::RemoveShoppingItemUseCaseImpl;
use business::application::shopping_item::update::UpdateShoppingItemUseCaseImpl;
use business::application::shopping_list::delete_record::DeleteHistoryRecordUseCaseImpl;
use business::application::shopping_list::finalize::FinalizeListUseCaseImpl;
use business::application::shopping_list::get_current::GetCurrentListUseCaseImpl;
use business::application::shopping_list::get_history::GetHistoryUseCaseImpl;
use business::application::shopping_list::resume::ResumeListUseCaseImpl;
use business::application::shopping_list::save_draft::SaveDraftUseCaseImpl;
use business::application::shopping_list::update_balance::UpdateBalanceUseCaseImpl;

use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
    pub shopping_item_api: crate::api::shopping_item::routes::ShoppingItemApi,
    pub profile_api: crate::api::profile::routes::ProfileApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let list_repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ShoppingItemRepositoryPostgres::new(pool.clone()));
        let profile_repository = Arc::new(ProfileRepositoryPostgres::new(pool));

        let auth_config = AuthConfig::from_env();
        let identity_client = IdentityClient::new(auth_config.base_url, auth_config.api_key);
        let auth_gateway = Arc::new(IdentityAuthGateway::new(identity_client));

        // Auth use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            gateway: auth_gateway.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            gateway: auth_gateway,
            logger: logger.clone(),
        });

        // Shopping list use cases
        let get_current_use_case = Arc::new(GetCurrentListUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_balance_use_case = Arc::new(UpdateBalanceUseCaseImpl {
            list_repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let finalize_use_case = Arc::new(FinalizeListUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let save_draft_use_case = Arc::new(SaveDraftUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_history_use_case = Arc::new(GetHistoryUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let resume_use_case = Arc::new(ResumeListUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_record_use_case = Arc::new(DeleteHistoryRecordUseCaseImpl {
            list_repository: list_repository.clone(),
            logger: logger.clone(),
        });

        // Shopping item use cases
        let add_item_use_case = Arc::new(AddShoppingItemUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateShoppingItemUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveShoppingItemUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });

        // Profile use cases
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            profile_repository: profile_repository.clone(),
            list_repository,
            logger: logger.clone(),
        });
        let update_name_use_case = Arc::new(UpdateProfileNameUseCaseImpl {
            profile_repository: profile_repository.clone(),
            logger: logger.clone(),
        });
        let set_theme_use_case = Arc::new(SetThemeUseCaseImpl {
            profile_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            logout_use_case,
        );

        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            get_current_use_case,
            update_balance_use_case,
            finalize_use_case,
            save_draft_use_case,
            get_history_use_case,
            resume_use_case,
            delete_record_use_case,
        );

        let shopping_item_api = crate::api::shopping_item::routes::ShoppingItemApi::new(
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
        );

        let profile_api = crate::api::profile::routes::ProfileApi::new(
            get_profile_use_case,
            update_name_use_case,
            set_theme_use_case,
        );

        Self {
            health_api,
            auth_api,
            shopping_list_api,
            shopping_item_api,
            profile_api,
        }
    }
}
