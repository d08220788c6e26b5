//! Run mode resolution tests against fixed mappings (no overlay files).

use std::cell::RefCell;

use super::{env_map, full_env};
use crate::loader::env::EnvKeys;
use crate::loader::run_mode::RunModeLoader;
use crate::types::{FrameworkMode, RunMode};

fn loader() -> RunModeLoader {
    RunModeLoader::new().without_overlays()
}

#[test]
fn test_production_applies_release_mode() {
    let applied = RefCell::new(Vec::new());
    let switch = |mode: FrameworkMode| applied.borrow_mut().push(mode);

    let env = env_map(&[("APP_ENV", "production")]);
    let ctx = loader().init(&env, &switch).unwrap();

    assert_eq!(ctx.run_mode(), RunMode::Production);
    assert_eq!(ctx.run_mode().as_str(), "production");
    assert_eq!(*applied.borrow(), vec![FrameworkMode::Release]);
}

#[test]
fn test_anything_else_is_development() {
    for label in [None, Some("development"), Some("staging"), Some("Production"), Some("")] {
        let applied = RefCell::new(Vec::new());
        let switch = |mode: FrameworkMode| applied.borrow_mut().push(mode);

        let env = match label {
            Some(label) => env_map(&[("APP_ENV", label)]),
            None => env_map(&[]),
        };
        let ctx = loader().init(&env, &switch).unwrap();

        assert_eq!(ctx.run_mode(), RunMode::Development, "label {label:?}");
        assert_eq!(ctx.run_mode().as_str(), "development");
        assert_eq!(*applied.borrow(), vec![FrameworkMode::Debug], "label {label:?}");
    }
}

#[test]
fn test_padded_production_label_is_development() {
    for label in [" production", "production ", " production\n", "\tproduction"] {
        let applied = RefCell::new(Vec::new());
        let switch = |mode: FrameworkMode| applied.borrow_mut().push(mode);

        let env = env_map(&[("APP_ENV", label)]);
        let ctx = loader().init(&env, &switch).unwrap();

        assert_eq!(ctx.run_mode(), RunMode::Development, "label {label:?}");
        assert_eq!(ctx.run_mode(), RunMode::from_label(label), "label {label:?}");
        assert_eq!(*applied.borrow(), vec![FrameworkMode::Debug], "label {label:?}");
    }
}

#[test]
fn test_custom_app_env_key() {
    let keys = EnvKeys {
        app_env: "DEPLOY_STAGE".to_string(),
        ..EnvKeys::default()
    };
    let env = env_map(&[("APP_ENV", "development"), ("DEPLOY_STAGE", "production")]);

    let ctx = loader().with_keys(&keys).init(&env, &|_: FrameworkMode| {}).unwrap();
    assert_eq!(ctx.run_mode(), RunMode::Production);
}

#[test]
fn test_startup_context_formats_for_its_mode() {
    let mut env = full_env();
    env.insert("APP_ENV".to_string(), "production".to_string());

    let ctx = loader().init(&env, &|_: FrameworkMode| {}).unwrap();
    assert_eq!(
        ctx.connection_string(&env).unwrap(),
        "user=app password=s3cret dbname=orders host=db.prod.internal port=6543 sslmode=require"
    );

    env.insert("APP_ENV".to_string(), "development".to_string());
    let ctx = loader().init(&env, &|_: FrameworkMode| {}).unwrap();
    assert!(ctx.connection_string(&env).unwrap().contains("host=localhost"));
}

#[test]
fn test_default_overlay_paths() {
    let loader = RunModeLoader::new();
    assert_eq!(loader.default_overlay(), std::path::Path::new(".env"));
    assert_eq!(loader.development_overlay(), std::path::Path::new("../.env"));
}
