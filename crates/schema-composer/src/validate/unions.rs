use async_graphql_parser::types::UnionType;

use super::*;

pub(crate) fn validate_union(type_name: &str, definition: &TypeDefinition, union: &UnionType, ctx: &mut Context<'_>) {
    directives::validate_directives(&definition.directives, DirectiveLocation::Union, ctx);

    if union.members.is_empty() {
        ctx.push_error(format!("Union type {type_name} must define one or more member types."));
    }

    for member in &union.members {
        let member_name = member.node.as_str();

        match ctx.get_type(member_name).map(|definition| &definition.kind) {
            None => ctx.push_error(format!("Unknown type \"{member_name}\".")),
            Some(TypeKind::Object(_)) => (),
            Some(_) => ctx.push_error(format!(
                "Union type {type_name} can only include Object types, it cannot include {member_name}."
            )),
        }
    }

    ctx.find_duplicates(union.members.iter().map(|member| member.node.as_str()), |ctx, name| {
        ctx.push_error(format!("Union type {type_name} can only include type {name} once."));
    });
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::compose;

    #[test]
    fn members_must_be_objects() {
        let sdl = indoc! {r#"
            type Photo { url: String }
            enum Kind { A }
            union Media = Photo | Kind | Photo
            type Query { media: [Media] }
        "#};

        insta::assert_snapshot!(compose(sdl, None).unwrap_err().message(), @r###"
        Union type Media can only include Object types, it cannot include Kind.
        Union type Media can only include type Photo once.
        "###);
    }
}
