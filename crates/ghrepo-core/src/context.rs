use ghrepo_config::Config;
use ghrepo_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use ghrepo_config::Config;
    use ghrepo_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version().unwrap();
            config.github_user = None;

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
