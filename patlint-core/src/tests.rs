//! End-to-end tests across the analysis pipeline: model file in,
//! classified report out.

use std::fs;

use crate::detect::{analyze_program, compile_ignore_patterns};
use crate::model::{ClassKind, ExprId, NewContext, Program, RefParent, Visibility, YieldExpr};
use crate::scan::gather_model_files;
use crate::settings::{load_workspace_settings, save_workspace_settings, AppSettings};
use crate::types::{infer_yield_type, Ty, TypeEvalContext, GENERATOR_QNAME};

/// A program mixing a canonical singleton, a lazy-init singleton, and
/// several near misses.
fn mixed_program() -> Program {
    let mut p = Program::new();
    let unit = p.add_unit("app.src");

    // Eager singleton: private ctor, field initializer.
    let eager = p.add_class(unit, "EagerRegistry", ClassKind::Class);
    let eager_ctor = p.add_constructor(eager, Visibility::Private);
    let eager_field = p.add_field(eager, "INSTANCE", "EagerRegistry", true, Visibility::Private);
    p.add_ctor_use(
        eager_ctor,
        unit,
        RefParent::New(NewContext::FieldInitializer(eager_field)),
    );

    // Lazy singleton: assignment inside an accessor.
    let lazy = p.add_class(unit, "LazyCache", ClassKind::Class);
    let lazy_ctor = p.add_constructor(lazy, Visibility::Private);
    let lazy_field = p.add_field(lazy, "instance", "LazyCache", true, Visibility::Private);
    p.add_ctor_use(
        lazy_ctor,
        unit,
        RefParent::New(NewContext::Assignment {
            lhs: crate::model::AssignTarget::Field(lazy_field),
        }),
    );

    // Near miss: also hands out fresh instances.
    let leaky = p.add_class(unit, "LeakyPool", ClassKind::Class);
    let leaky_ctor = p.add_constructor(leaky, Visibility::Private);
    let leaky_field = p.add_field(leaky, "instance", "LeakyPool", true, Visibility::Private);
    p.add_ctor_use(
        leaky_ctor,
        unit,
        RefParent::New(NewContext::FieldInitializer(leaky_field)),
    );
    p.add_ctor_use(leaky_ctor, unit, RefParent::New(NewContext::ReturnValue));

    // Near miss: public constructor.
    let open = p.add_class(unit, "OpenService", ClassKind::Class);
    p.add_constructor(open, Visibility::Public);
    p.add_field(open, "instance", "OpenService", true, Visibility::Private);

    // Never a candidate: interface.
    p.add_class(unit, "Registry", ClassKind::Interface);

    p
}

#[test]
fn test_pipeline_classifies_mixed_program() {
    let p = mixed_program();
    let analysis = analyze_program(&p, &[]);

    assert_eq!(analysis.stats.total_classes, 5);
    assert_eq!(analysis.stats.singleton_count, 2);
    let names: Vec<&str> = analysis.singletons.iter().map(|m| m.class.as_str()).collect();
    assert_eq!(names, vec!["EagerRegistry", "LazyCache"]);
}

#[test]
fn test_pipeline_respects_ignore_patterns() {
    let p = mixed_program();
    let ignore = compile_ignore_patterns(&["Lazy".to_string()]).unwrap();
    let analysis = analyze_program(&p, &ignore);

    assert_eq!(analysis.stats.singleton_count, 1);
    assert_eq!(analysis.singletons[0].class, "EagerRegistry");
}

#[test]
fn test_model_file_round_trip_preserves_classification() {
    let dir = std::env::temp_dir().join("patlint_e2e_roundtrip");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("app.json");

    let p = mixed_program();
    fs::write(&path, p.to_json().unwrap()).unwrap();

    let loaded = Program::from_json_file(&path).unwrap();
    let analysis = analyze_program(&loaded, &[]);
    assert_eq!(analysis.stats.singleton_count, 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_scan_then_analyze_each_model() {
    let dir = std::env::temp_dir().join("patlint_e2e_scan");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    fs::write(
        dir.join("one.json"),
        mixed_program().to_json().unwrap(),
    )
    .unwrap();
    fs::write(dir.join("empty.json"), Program::new().to_json().unwrap()).unwrap();

    let files = gather_model_files(&dir).unwrap();
    assert_eq!(files.len(), 2);

    let total: usize = files
        .iter()
        .map(|f| {
            let p = Program::from_json_file(f).unwrap();
            analyze_program(&p, &[]).stats.singleton_count
        })
        .sum();
    assert_eq!(total, 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_settings_survive_an_analysis_session() {
    let dir = std::env::temp_dir().join("patlint_e2e_settings");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join(".patlint/settings.toml");

    let mut app = AppSettings::default();
    let mut settings = load_workspace_settings(&path, &mut app).unwrap();

    let p = mixed_program();
    for m in analyze_program(&p, &[]).singletons {
        settings.push_recent_target(&m.class);
    }
    settings.set_recent_root(dir.display().to_string());
    save_workspace_settings(&path, &settings).unwrap();

    let back = load_workspace_settings(&path, &mut app).unwrap();
    // Newest first: LazyCache was pushed last.
    assert_eq!(back.recent_targets()[0], "LazyCache");
    assert_eq!(back.recent_targets().len(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_yield_typing_over_context_built_alongside_a_model() {
    let mut ctx = TypeEvalContext::new();
    ctx.insert(
        ExprId(0),
        Ty::generic(
            GENERATOR_QNAME,
            vec![Ty::class("Item"), Ty::None, Ty::class("Summary")],
        ),
    );
    ctx.insert(ExprId(1), Ty::class("Item"));

    let delegating = YieldExpr::delegating(ExprId(0));
    let plain = YieldExpr::new(ExprId(1));

    assert_eq!(infer_yield_type(&delegating, &ctx), Some(Ty::class("Summary")));
    assert_eq!(infer_yield_type(&plain, &ctx), Some(Ty::class("Item")));
}
