use indoc::indoc;
use schema_composer::{compose, AuxiliaryFragment, Composer, Origin};

const BLOG: &str = indoc! {r#"
    """
    Something that can be looked up by id.
    """
    interface Node {
      id: ID!
    }

    type Author implements Node {
      id: ID!
      name: String @fake(type: fullName)
      posts(first: Int = 3): [Post!]! @listLength(min: 1, max: 5)
    }

    type Post implements Node {
      id: ID!
      title: String @examples(values: ["Hello"])
      status: Status
      author: Author
    }

    enum Status {
      DRAFT
      PUBLISHED @deprecated(reason: "use LIVE")
      LIVE
    }

    union SearchResult = Author | Post

    input PostFilter {
      status: Status = LIVE
      "Matches titles containing the text"
      title: String
    }

    scalar DateTime @specifiedBy(url: "https://tools.ietf.org/html/rfc3339")

    type Query {
      node(id: ID!): Node
      posts(filter: PostFilter): [Post]
      search(text: String!): [SearchResult!]!
      now: DateTime
    }

    type Mutation {
      publish(id: ID!): Post
    }
"#};

#[test]
fn printed_schema_composes_to_the_same_schema() {
    let schema = compose(BLOG, None).unwrap();
    let printed = schema.sdl();

    let recomposed = compose(&printed, None).unwrap();

    assert_eq!(recomposed.sdl(), printed);
    assert_eq!(recomposed.mutation_type(), Some("Mutation"));
}

#[test]
fn printed_schema_snapshot() {
    let schema = compose(BLOG, None).unwrap();

    insta::assert_snapshot!(schema.sdl(), @r###"
    "Something that can be looked up by id."
    interface Node {
      id: ID!
    }

    type Author implements Node {
      id: ID!
      name: String @fake(type: fullName)
      posts(first: Int = 3): [Post!]! @listLength(min: 1, max: 5)
    }

    type Post implements Node {
      id: ID!
      title: String @examples(values: ["Hello"])
      status: Status
      author: Author
    }

    enum Status {
      DRAFT
      PUBLISHED @deprecated(reason: "use LIVE")
      LIVE
    }

    union SearchResult = Author | Post

    input PostFilter {
      status: Status = LIVE
      "Matches titles containing the text"
      title: String
    }

    scalar DateTime @specifiedBy(url: "https://tools.ietf.org/html/rfc3339")

    type Query {
      node(id: ID!): Node
      posts(filter: PostFilter): [Post]
      search(text: String!): [SearchResult!]!
      now: DateTime
    }

    type Mutation {
      publish(id: ID!): Post
    }
    "###);
}

#[test]
fn unbalanced_braces_are_a_syntax_error() {
    let error = compose("type Query { hello: String", None).unwrap_err();

    assert!(error.message().starts_with("Syntax Error"), "{}", error.message());
}

#[test]
fn unterminated_string_is_a_syntax_error() {
    let error = compose("type Query { hello: String @examples(values: [\"oops]) }", None).unwrap_err();

    assert!(error.message().starts_with("Syntax Error"), "{}", error.message());
}

#[test]
fn empty_document_is_rejected() {
    assert!(compose("", None).is_err());
}

#[test]
fn undefined_type_reference() {
    let error = compose("type Query { foo: Foo }", None).unwrap_err();

    insta::assert_snapshot!(error.message(), @r###"Unknown type "Foo"."###);
}

#[test]
fn all_problems_are_reported_at_once() {
    let sdl = indoc! {r#"
        type Query {
          a: Foo
          b: Bar
        }
    "#};

    insta::assert_snapshot!(compose(sdl, None).unwrap_err().message(), @r###"
    Unknown type "Foo".
    Unknown type "Bar".
    "###);
}

#[test]
fn auxiliary_definitions_are_available_but_hidden() {
    let schema = compose("type Query { when: String @fake(type: pastDate) }", None).unwrap();

    let fake_types = schema.get_type("fake__Types").unwrap();
    assert_eq!(fake_types.origin(), Origin::Auxiliary);
    assert!(!schema.sdl().contains("fake__Types"));
}

#[test]
fn auxiliary_definitions_cannot_be_redefined() {
    let error = compose("type Query { a: Int } enum fake__Types { other }", None).unwrap_err();

    insta::assert_snapshot!(
        error.message(),
        @r###"Type "fake__Types" already exists in the schema. It cannot also be defined in this type definition."###
    );
}

#[test]
fn composer_without_auxiliary_fragment() {
    let composer = Composer::new(AuxiliaryFragment::empty());

    assert!(composer.compose("type Query { a: Int }", None).is_ok());

    let error = composer
        .compose("type Query { a: Int @fake(type: word) }", None)
        .unwrap_err();
    insta::assert_snapshot!(error.message(), @r###"Unknown directive "@fake"."###);
}

#[test]
fn custom_auxiliary_fragment() {
    let fragment = AuxiliaryFragment::parse("directive @mock(value: String) on FIELD_DEFINITION").unwrap();
    let composer = Composer::new(fragment);

    let schema = composer.compose(r#"type Query { a: String @mock(value: "x") }"#, None).unwrap();

    assert!(schema.sdl().contains(r#"@mock(value: "x")"#));
    assert!(!schema.sdl().contains("directive @mock"));
}

mod extension_mode {
    use super::*;

    const BASE: &str = indoc! {r#"
        type User {
          id: ID!
          login: String!
        }

        type Query {
          viewer: User
        }
    "#};

    #[test]
    fn adding_a_field_to_a_base_type() {
        let extension = indoc! {r#"
            extend type User {
              pets: [Pet] @listLength(min: 1, max: 2)
            }

            type Pet {
              name: String @fake(type: firstName)
            }
        "#};

        let schema = compose(extension, Some(BASE)).unwrap();

        insta::assert_snapshot!(schema.sdl(), @r###"
        type User {
          id: ID!
          login: String!
          pets: [Pet] @listLength(min: 1, max: 2)
        }

        type Query {
          viewer: User
        }

        type Pet {
          name: String @fake(type: firstName)
        }
        "###);

        assert_eq!(schema.get_type("User").unwrap().origin(), Origin::Base);
        assert_eq!(schema.get_type("Pet").unwrap().origin(), Origin::User);
    }

    #[test]
    fn redefining_a_base_type() {
        let error = compose("type User { id: Int }", Some(BASE)).unwrap_err();

        insta::assert_snapshot!(
            error.message(),
            @r###"Type "User" already exists in the schema. It cannot also be defined in this type definition."###
        );
    }

    #[test]
    fn redefining_a_base_field() {
        let error = compose("extend type User { login: Int }", Some(BASE)).unwrap_err();

        insta::assert_snapshot!(
            error.message(),
            @r###"Field "User.login" already exists in the schema. It cannot also be defined in this type extension."###
        );
    }

    #[test]
    fn extending_with_the_wrong_kind() {
        let error = compose("extend input User { extra: Int }", Some(BASE)).unwrap_err();

        insta::assert_snapshot!(error.message(), @r###"Cannot extend non-input object type "User"."###);
    }

    #[test]
    fn adding_a_mutation_root() {
        let extension = indoc! {r#"
            extend schema { mutation: Mutation }

            type Mutation {
              follow(login: String!): User
            }
        "#};

        let schema = compose(extension, Some(BASE)).unwrap();

        assert_eq!(schema.query_type(), "Query");
        assert_eq!(schema.mutation_type(), Some("Mutation"));
    }

    #[test]
    fn replacing_the_query_root() {
        let extension = indoc! {r#"
            extend schema { query: Root }
            type Root { a: Int }
        "#};

        let error = compose(extension, Some(BASE)).unwrap_err();

        insta::assert_snapshot!(
            error.message(),
            @"Type for query already defined in the schema. It cannot be redefined."
        );
    }

    #[test]
    fn a_broken_base_is_reported() {
        let error = compose("extend type User { age: Int }", Some("type Query { a: Missing }")).unwrap_err();

        insta::assert_snapshot!(error.message(), @r###"Unknown type "Missing"."###);
    }
}
