use graphql_faker::{BuildError, FakeSchema, ForwardedHeaders};
use indoc::indoc;
use serde_json::Value;

fn schema(sdl: &str) -> FakeSchema {
    let composed = schema_composer::compose(sdl, None).unwrap();
    FakeSchema::build(&composed).unwrap()
}

async fn data(schema: &FakeSchema, query: &str) -> Value {
    let response = schema.execute(query, ForwardedHeaders::default()).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    response.data.into_json().unwrap()
}

#[tokio::test]
async fn hello_is_never_null() {
    let schema = schema("type Query { hello: String }");

    let data = data(&schema, "{ hello }").await;

    assert!(data["hello"].is_string(), "{data}");
}

#[tokio::test]
async fn standard_scalars() {
    let schema = schema("type Query { id: ID! count: Int! ratio: Float! enabled: Boolean! }");

    let data = data(&schema, "{ id count ratio enabled }").await;

    assert!(data["id"].is_string());
    assert!(data["count"].is_i64());
    assert!(data["ratio"].is_number());
    assert!(data["enabled"].is_boolean());
}

#[tokio::test]
async fn examples_are_picked_from() {
    let schema = schema(r#"type Query { color: String @examples(values: ["red", "blue"]) }"#);

    for _ in 0..10 {
        let data = data(&schema, "{ color }").await;
        let color = data["color"].as_str().unwrap();

        assert!(["red", "blue"].contains(&color), "{color}");
    }
}

#[tokio::test]
async fn scalar_level_directives_apply_to_every_field() {
    let sdl = indoc! {r#"
        scalar Currency @examples(values: ["EUR"])
        type Query { price: Currency other: Currency @examples(values: ["USD"]) }
    "#};

    let data = data(&schema(sdl), "{ price other }").await;

    insta::assert_json_snapshot!(data, @r###"
    {
      "price": "EUR",
      "other": "USD"
    }
    "###);
}

#[tokio::test]
async fn fake_generator_with_options() {
    let sdl = r#"type Query { answer: Int @fake(type: number, options: { minNumber: 42, maxNumber: 42 }) }"#;

    let data = data(&schema(sdl), "{ answer }").await;

    insta::assert_json_snapshot!(data, @r###"
    {
      "answer": 42
    }
    "###);
}

#[tokio::test]
async fn list_length_is_respected() {
    let sdl = "type Query { tags: [String!]! @listLength(min: 3, max: 3) names: [String] }";

    let data = data(&schema(sdl), "{ tags names }").await;

    assert_eq!(data["tags"].as_array().unwrap().len(), 3);
    assert!((2..=4).contains(&data["names"].as_array().unwrap().len()));
}

#[tokio::test]
async fn nested_objects_enums_and_abstract_types() {
    let sdl = indoc! {r#"
        interface Node { id: ID! }
        enum Role { ADMIN GUEST }
        type User implements Node { id: ID! role: Role! friends: [User!]! @listLength(min: 1, max: 1) }
        type Bot implements Node { id: ID! }
        union Actor = User | Bot
        type Query { me: User! node: Node actor: Actor }
    "#};

    let data = data(
        &schema(sdl),
        "{ me { role friends { id } } node { __typename id } actor { __typename } }",
    )
    .await;

    assert!(["ADMIN", "GUEST"].contains(&data["me"]["role"].as_str().unwrap()));
    assert!(data["me"]["friends"][0]["id"].is_string());
    assert!(["User", "Bot"].contains(&data["node"]["__typename"].as_str().unwrap()));
    assert!(["User", "Bot"].contains(&data["actor"]["__typename"].as_str().unwrap()));
}

#[tokio::test]
async fn arguments_and_mutations() {
    let sdl = indoc! {r#"
        input NewPost { title: String! }
        type Post { title: String }
        type Query { posts(first: Int = 10): [Post] }
        type Mutation { createPost(input: NewPost!): Post }
    "#};
    let schema = schema(sdl);

    let data = data(&schema, r#"mutation { createPost(input: { title: "x" }) { title } }"#).await;
    assert!(data["createPost"]["title"].is_string());

    let response = schema.execute("{ posts(last: 1) { title } }", ForwardedHeaders::default()).await;
    assert_eq!(response.errors.len(), 1);
}

#[tokio::test]
async fn introspection_shows_descriptions_and_deprecations() {
    let sdl = indoc! {r#"
        type Query {
          "The current version"
          version: String
          legacy: String @deprecated(reason: "gone")
        }
    "#};

    let data = data(
        &schema(sdl),
        r#"{ __type(name: "Query") { fields(includeDeprecated: true) { name description isDeprecated deprecationReason } } }"#,
    )
    .await;

    insta::assert_json_snapshot!(data, @r###"
    {
      "__type": {
        "fields": [
          {
            "name": "version",
            "description": "The current version",
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "legacy",
            "description": null,
            "isDeprecated": true,
            "deprecationReason": "gone"
          }
        ]
      }
    }
    "###);
}

#[test]
fn inverted_list_length_is_rejected() {
    let composed = schema_composer::compose("type Query { a: [Int] @listLength(min: 3, max: 1) }", None).unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    assert!(matches!(error, BuildError::InvalidDirective { .. }));
    insta::assert_snapshot!(error.to_string(), @"Invalid @listLength on Query.a: `min` (3) is greater than `max` (1)");
}

#[test]
fn oversized_list_length_is_rejected() {
    let composed = schema_composer::compose("type Query { a: [Int] @listLength(min: 1, max: 100000000) }", None).unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    insta::assert_snapshot!(error.to_string(), @"Invalid @listLength on Query.a: `max` (100000000) is greater than 1000");
}

#[test]
fn unbounded_money_range_is_rejected() {
    let composed = schema_composer::compose(
        "type Query { p: String @fake(type: money, options: { minMoney: -1e308, maxMoney: 1e308 }) }",
        None,
    )
    .unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    assert!(matches!(error, BuildError::InvalidDirective { .. }));
    insta::assert_snapshot!(error.to_string(), @"Invalid @fake on Query.p: the range from `minMoney` to `maxMoney` is too large");
}

#[test]
fn inverted_number_range_is_rejected() {
    let composed = schema_composer::compose(
        "type Query { n: Int @fake(type: number, options: { minNumber: 10, maxNumber: 1 }) }",
        None,
    )
    .unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    insta::assert_snapshot!(error.to_string(), @"Invalid @fake on Query.n: `minNumber` (10) is greater than `maxNumber` (1)");
}

#[test]
fn huge_password_length_is_rejected() {
    let composed = schema_composer::compose(
        "type Query { p: String @fake(type: password, options: { passwordLength: 1000000000 }) }",
        None,
    )
    .unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    assert!(error.to_string().contains("`passwordLength` (1000000000) is greater than 1024"), "{error}");
}

#[test]
fn unknown_fake_generator_is_rejected() {
    // Directive arguments are not type checked during composition.
    let composed = schema_composer::compose("type Query { a: String @fake(type: hologram) }", None).unwrap();

    let error = FakeSchema::build(&composed).err().unwrap();

    assert!(error.to_string().starts_with("Invalid @fake on Query.a:"), "{error}");
}
