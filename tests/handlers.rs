// ABOUTME: Integration tests for runtime handler validation and dispatch.
// ABOUTME: Covers validation ordering, request contents, and the Linux-plan assertion.

use proptest::prelude::*;
use weblift::client::ExistingApp;
use weblift::config::{ContainerSettings, DeployConfig, EnvValue, PricingTier, RuntimeSection};
use weblift::handlers::{ConfigurationError, RuntimeHandler};
use weblift::request::{OsKind, RuntimeSetting};
use weblift::types::{AppName, ImageRef};

fn private_config(
    server_id: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> DeployConfig {
    DeployConfig {
        app: AppName::new("myapp").unwrap(),
        resource_group: "rg".to_string(),
        region: "westus".to_string(),
        pricing_tier: PricingTier::P1v2,
        runtime: RuntimeSection::PrivateRegistry(ContainerSettings {
            image: ImageRef::parse("registry.example.com/org/app:2.0").unwrap(),
            server_id: server_id.map(String::from),
            server_url: Some("registry.example.com".to_string()),
            username: username.map(|s| EnvValue::Literal(s.to_string())),
            password: password.map(|s| EnvValue::Literal(s.to_string())),
        }),
    }
}

fn linux_app() -> ExistingApp {
    ExistingApp {
        name: AppName::new("myapp").unwrap(),
        resource_group: "rg".to_string(),
        os: OsKind::Linux,
    }
}

fn windows_app() -> ExistingApp {
    ExistingApp {
        os: OsKind::Windows,
        ..linux_app()
    }
}

mod define {
    use super::*;

    #[test]
    fn missing_server_id_fails_before_anything_else() {
        let config = private_config(None, Some("deploy"), Some("hunter2"));
        let err = RuntimeHandler::PrivateRegistry
            .define_app(&config)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingServerId));
    }

    #[test]
    fn missing_username_fails_with_credentials_error() {
        let config = private_config(Some("my-registry"), None, Some("hunter2"));
        let err = RuntimeHandler::PrivateRegistry
            .define_app(&config)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingCredentials));
    }

    #[test]
    fn missing_password_fails_with_credentials_error() {
        let config = private_config(Some("my-registry"), Some("deploy"), None);
        let err = RuntimeHandler::PrivateRegistry
            .define_app(&config)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingCredentials));
    }

    #[test]
    fn complete_settings_yield_linux_plan_at_configured_tier() {
        let config = private_config(Some("my-registry"), Some("deploy"), Some("hunter2"));
        let definition = RuntimeHandler::PrivateRegistry.define_app(&config).unwrap();

        assert_eq!(definition.app.as_str(), "myapp");
        assert_eq!(definition.resource_group, "rg");
        assert_eq!(definition.plan.os, OsKind::Linux);
        assert_eq!(definition.plan.tier, PricingTier::P1v2);

        let RuntimeSetting::PrivateRegistryImage {
            image,
            server_url,
            credentials,
        } = &definition.runtime
        else {
            panic!("expected private-registry runtime setting");
        };
        assert_eq!(image.to_string(), "registry.example.com/org/app:2.0");
        assert_eq!(server_url.as_deref(), Some("registry.example.com"));
        assert_eq!(credentials.username, "deploy");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn unresolvable_credential_reports_the_variable() {
        temp_env::with_var_unset("WEBLIFT_TEST_REGISTRY_PW", || {
            let mut config = private_config(Some("my-registry"), Some("deploy"), None);
            let RuntimeSection::PrivateRegistry(ref mut settings) = config.runtime else {
                unreachable!();
            };
            settings.password = Some(EnvValue::FromEnv {
                var: "WEBLIFT_TEST_REGISTRY_PW".to_string(),
                default: None,
            });

            let err = RuntimeHandler::PrivateRegistry
                .define_app(&config)
                .unwrap_err();
            match err {
                ConfigurationError::UnresolvedCredential(var) => {
                    assert_eq!(var, "WEBLIFT_TEST_REGISTRY_PW");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        });
    }

    proptest! {
        // No matter which credentials are present, an absent server id is
        // always the first failure reported.
        #[test]
        fn absent_server_id_always_wins(
            username in proptest::option::of("[a-z]{1,8}"),
            password in proptest::option::of("[a-z]{1,8}"),
        ) {
            let config = private_config(None, username.as_deref(), password.as_deref());
            let err = RuntimeHandler::PrivateRegistry.define_app(&config).unwrap_err();
            prop_assert!(matches!(err, ConfigurationError::MissingServerId));
        }

        #[test]
        fn any_absent_credential_fails(
            username in proptest::option::of("[a-z]{1,8}"),
            password in proptest::option::of("[a-z]{1,8}"),
        ) {
            prop_assume!(username.is_none() || password.is_none());
            let config = private_config(Some("my-registry"), username.as_deref(), password.as_deref());
            let err = RuntimeHandler::PrivateRegistry.define_app(&config).unwrap_err();
            prop_assert!(matches!(err, ConfigurationError::MissingCredentials));
        }
    }
}

mod update {
    use super::*;

    #[test]
    fn non_linux_app_fails_before_credential_validation() {
        // Credentials are also missing here; the plan assertion must fire first.
        let config = private_config(Some("my-registry"), None, None);
        let err = RuntimeHandler::PrivateRegistry
            .update_app(&config, &windows_app())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NotLinuxApp { .. }));
    }

    #[test]
    fn linux_app_with_complete_credentials_succeeds() {
        let config = private_config(Some("my-registry"), Some("deploy"), Some("hunter2"));
        let update = RuntimeHandler::PrivateRegistry
            .update_app(&config, &linux_app())
            .unwrap();

        let RuntimeSetting::PrivateRegistryImage {
            image, credentials, ..
        } = &update.runtime
        else {
            panic!("expected private-registry runtime setting");
        };
        assert_eq!(image.to_string(), "registry.example.com/org/app:2.0");
        assert_eq!(credentials.username, "deploy");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn absent_container_settings_fail_cleanly() {
        // A container handler run against a configuration with no container
        // settings reports a configuration error rather than faulting.
        let config = DeployConfig {
            app: AppName::new("myapp").unwrap(),
            resource_group: "rg".to_string(),
            region: "westus".to_string(),
            pricing_tier: PricingTier::S1,
            runtime: RuntimeSection::Builtin {
                stack: "tomcat".to_string(),
                version: "9.0".to_string(),
            },
        };

        let err = RuntimeHandler::PrivateRegistry
            .update_app(&config, &linux_app())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingContainerSettings));

        let err = RuntimeHandler::PrivateRegistry
            .define_app(&config)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingContainerSettings));
    }
}

mod other_runtimes {
    use super::*;

    fn config_with(runtime: RuntimeSection) -> DeployConfig {
        DeployConfig {
            app: AppName::new("myapp").unwrap(),
            resource_group: "rg".to_string(),
            region: "westus".to_string(),
            pricing_tier: PricingTier::S1,
            runtime,
        }
    }

    #[test]
    fn public_registry_needs_no_credentials() {
        let config = config_with(RuntimeSection::PublicRegistry(ContainerSettings {
            image: ImageRef::parse("nginx:1.27").unwrap(),
            server_id: None,
            server_url: None,
            username: None,
            password: None,
        }));

        let definition = RuntimeHandler::PublicRegistry.define_app(&config).unwrap();
        let RuntimeSetting::PublicImage { image } = &definition.runtime else {
            panic!("expected public image runtime setting");
        };
        assert_eq!(image.name(), "nginx");
    }

    #[test]
    fn archive_rejects_unsupported_extensions() {
        let config = config_with(RuntimeSection::Archive {
            path: "bundle.tar.gz".into(),
        });
        let err = RuntimeHandler::Archive.define_app(&config).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnsupportedArchive(_)));
    }

    #[test]
    fn archive_update_skips_the_linux_assertion() {
        // Archive deployment applies to either plan OS.
        let config = config_with(RuntimeSection::Archive {
            path: "target/app.zip".into(),
        });
        let update = RuntimeHandler::Archive
            .update_app(&config, &windows_app())
            .unwrap();
        assert!(matches!(update.runtime, RuntimeSetting::Archive { .. }));
    }

    #[test]
    fn builtin_requires_stack_and_version() {
        let config = config_with(RuntimeSection::Builtin {
            stack: "".to_string(),
            version: "9.0".to_string(),
        });
        let err = RuntimeHandler::Builtin.define_app(&config).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingRuntimeStack));
    }

    #[test]
    fn builtin_update_requires_linux_plan() {
        let config = config_with(RuntimeSection::Builtin {
            stack: "tomcat".to_string(),
            version: "9.0".to_string(),
        });
        let err = RuntimeHandler::Builtin
            .update_app(&config, &windows_app())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NotLinuxApp { .. }));
    }
}
