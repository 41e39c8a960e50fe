use super::*;
use crate::schema::RootOperation;

pub(crate) fn validate_root_types(ctx: &mut Context<'_>) {
    let registry = ctx.registry;
    let mut roots: Vec<(RootOperation, &str)> = Vec::new();

    for operation in RootOperation::ALL {
        let Some(root) = registry.root_type(operation) else {
            if operation == RootOperation::Query {
                ctx.push_error("Query root type must be provided.".to_owned());
            }
            continue;
        };

        let capitalized = operation.default_type_name();

        match ctx.get_type(root).map(|definition| &definition.kind) {
            None => ctx.push_error(format!("Unknown type \"{root}\".")),
            Some(TypeKind::Object(_)) => (),
            Some(_) => ctx.push_error(format!(
                "{capitalized} root type must be Object type, it cannot be {root}."
            )),
        }

        if let Some((previous, _)) = roots.iter().find(|(_, name)| *name == root) {
            ctx.push_error(format!(
                "All root types must be different, \"{root}\" type is used as {previous} and {operation} root types."
            ));
        }

        roots.push((operation, root));
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::compose;

    fn errors(sdl: &str) -> String {
        compose(sdl, None).unwrap_err().message().to_owned()
    }

    #[test]
    fn query_root_is_required() {
        insta::assert_snapshot!(errors("type User { name: String }"), @"Query root type must be provided.");
    }

    #[test]
    fn roots_must_be_distinct_objects() {
        let sdl = indoc! {r#"
            schema { query: Root mutation: Root subscription: Events }
            type Root { a: Int }
            interface Events { b: Int }
        "#};

        insta::assert_snapshot!(errors(sdl), @r###"
        All root types must be different, "Root" type is used as query and mutation root types.
        Subscription root type must be Object type, it cannot be Events.
        "###);
    }

    #[test]
    fn unknown_root_type() {
        insta::assert_snapshot!(errors("schema { query: Root }"), @r###"Unknown type "Root"."###);
    }
}
