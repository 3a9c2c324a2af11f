use super::*;
use crate::syntax::TextRange;

fn ident(id: u64, name: &str) -> Expr {
    Expr::Ident {
        id: NodeId(id),
        range: TextRange::new(0, name.len()),
        name: name.to_string(),
    }
}

#[test]
fn test_empty_context_resolves_nothing() {
    let ctx = BindingContext::Empty;
    assert!(!ctx.is_available());
    assert_eq!(ctx.type_of(&ident(1, "c")), None);
    assert_eq!(ctx.resolved_count(), 0);
}

#[test]
fn test_resolved_context_lookup_by_node_id() {
    let ctx = BindingContext::from_bindings(vec![
        TypeBinding {
            node: NodeId(1),
            ty: SemanticType::new("Color", true),
        },
        TypeBinding {
            node: NodeId(2),
            ty: SemanticType::new("Shape", false),
        },
    ]);

    assert!(ctx.is_available());
    assert_eq!(ctx.resolved_count(), 2);
    assert_eq!(
        ctx.type_of(&ident(1, "c")),
        Some(&SemanticType::new("Color", true))
    );
    assert!(!ctx.type_of(&ident(2, "s")).unwrap().is_enum());
    assert_eq!(ctx.type_of(&ident(3, "x")), None);
}

#[test]
fn test_available_context_without_entries() {
    let ctx = BindingContext::from_bindings(Vec::new());
    assert!(ctx.is_available());
    assert_eq!(ctx.type_of(&ident(1, "c")), None);
}

#[test]
fn test_binding_json_shape() {
    let binding: TypeBinding =
        serde_json::from_str(r#"{ "node": 7, "type": { "name": "Color", "is_enum": true } }"#)
            .unwrap();
    assert_eq!(binding.node, NodeId(7));
    assert_eq!(binding.ty.name, "Color");
    assert!(binding.ty.is_enum);

    let plain: SemanticType = serde_json::from_str(r#"{ "name": "Int" }"#).unwrap();
    assert!(!plain.is_enum);
}
