use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::collections::HashMap;

use serde_json::{Value, json};
use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::scalar::Complex64;

use crate::{ErrorCode, Exact, QueryOptions, QueryPath, ReflectQuery, any, get, get_or, may, must};

#[derive(Reflect)]
struct Person {
    pub name: String,
    pub age: u32,
    is_staff: bool,
    address: Option<Box<Address>>,
    tags: Vec<Box<dyn Reflect>>,
    meta: HashMap<String, Box<dyn Reflect>>,
    pub scores: [u8; 3],
}

#[derive(Reflect, Clone)]
struct Address {
    pub country: String,
    pub city: String,
    street: String,
    owner: Option<Arc<Person>>,
}

const ADDRESS: &str = "{Malawi Mesa 123 Main St <nil>}";

fn address() -> Address {
    Address {
        country: "Malawi".into(),
        city: "Mesa".into(),
        street: "123 Main St".into(),
        owner: None,
    }
}

fn person() -> Person {
    let mut labels: HashMap<String, Box<dyn Reflect>> = HashMap::new();
    labels.insert("d".into(), Box::new("d"));

    let mut meta: HashMap<String, Box<dyn Reflect>> = HashMap::new();
    meta.insert("a".into(), Box::new("a"));
    meta.insert("b".into(), Box::new(1_i32));
    meta.insert("c".into(), Box::new(Value::Null));
    meta.insert("addr".into(), Box::new(address()));
    meta.insert("e,f".into(), Box::new("e,f"));

    Person {
        name: "Vin Mars".into(),
        age: 30,
        is_staff: true,
        address: Some(Box::new(address())),
        tags: vec![
            "tag1".into_boxed_reflect(),
            "tag2".into_boxed_reflect(),
            labels.into_boxed_reflect(),
            address().into_boxed_reflect(),
        ],
        meta,
        scores: [7, 8, 9],
    }
}

// -----------------------------------------------------------------------------
// Struct fields

#[test]
fn identity_path() {
    let found = any(&"string1", QueryOptions::NONE, QueryPath::default()).unwrap();
    assert_eq!(found.downcast_ref::<&str>(), Some(&"string1"));

    let error = any(&"string1", QueryOptions::NONE, "1").unwrap_err();
    assert_eq!(error.to_string(), "QueryError[1]: invalid kind: scalar");
}

#[test]
fn exported_fields() {
    let person = person();
    let name: String = must(&person, QueryOptions::SAFE_FIELDS, "name");
    assert_eq!(name, "Vin Mars");

    let name: String = must(&person, QueryOptions::NONE, " NAME ");
    assert_eq!(name, "Vin Mars");

    let error = get::<String>(&person, QueryOptions::CASE_SENSITIVE, "Name").unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.detail(), "[struct] value not found by field Name");
}

#[test]
fn private_fields() {
    let person = person();
    assert!(must::<bool>(&person, QueryOptions::NONE, "is_staff"));
    assert_eq!(must::<i64>(&person, QueryOptions::NONE, "is_staff"), 1);
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "is_staff"), "true");

    let error = get::<bool>(&person, QueryOptions::SAFE_FIELDS, "is_staff").unwrap_err();
    assert_eq!(error.to_string(), "QueryError[1]: [struct] field is_staff not exported");

    let error = get::<bool>(&person, QueryOptions::SAFE_FIELDS, "name, ext").unwrap_err();
    assert_eq!(
        error.to_string(),
        "QueryError[1]: invalid kind: scalar -> [struct] error query keys: [ext]"
    );

    let error = get::<bool>(&person, QueryOptions::SAFE_FIELDS, "ext").unwrap_err();
    assert_eq!(error.detail(), "[struct] field ext not exists");
}

#[test]
fn pointer_fields() {
    let person = person();
    let country: String = must(&person, QueryOptions::NONE, "address, Country");
    assert_eq!(country, "Malawi");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, ["address", "city"]), "Mesa");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "address, street"), "123 Main St");

    let error = get::<String>(&person, QueryOptions::NONE, "address, owner, name").unwrap_err();
    assert_eq!(
        error.to_string(),
        "QueryError[1]: invalid kind: nil \
         -> [struct] error query keys: [name] \
         -> [struct] error query keys: [owner name]"
    );
    assert_eq!(error.root().detail(), "invalid kind: nil");
}

#[test]
fn owner_cycle() {
    let owner = Arc::new(person());
    let address = Address {
        owner: Some(owner),
        ..address()
    };
    let name: String = must(&address, QueryOptions::NONE, "owner, name");
    assert_eq!(name, "Vin Mars");
}

// -----------------------------------------------------------------------------
// Sequences

#[test]
fn rendering() {
    let person = person();
    let tags: String = must(&person, QueryOptions::NONE, "tags");
    assert_eq!(tags, "[tag1 tag2 map[d:d] {Malawi Mesa 123 Main St <nil>}]");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "scores"), "[7 8 9]");
}

#[test]
fn indices() {
    let person = person();
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, 1"), "tag2");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, first"), "tag1");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, -1"), ADDRESS);
    assert_eq!(
        must::<String>(&person, QueryOptions::NONE, "tags, last"),
        must::<String>(&person, QueryOptions::NONE, "tags, 3"),
    );

    let error = get::<String>(&person, QueryOptions::NONE, "tags, -5").unwrap_err();
    assert_eq!(
        error.to_string(),
        "QueryError[1]: [slice] invalid key: -5 -> [struct] error query keys: [-5]"
    );
    assert_eq!(error.root().detail(), "[slice] invalid key: -5");

    let error = get::<String>(&person, QueryOptions::NONE, "tags, 4").unwrap_err();
    assert_eq!(error.root().detail(), "[slice] invalid key: 4");
}

#[test]
fn filters() {
    let person = person();
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, d=d"), "map[d:d]");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, City=Mesa"), ADDRESS);
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "tags, =tag2"), "tag2");
    assert_eq!(
        must::<String>(&person, QueryOptions::NONE, "tags, 3, city"),
        must::<String>(&person, QueryOptions::NONE, "tags, city=Mesa, city"),
    );
    assert_eq!(must::<u64>(&person, QueryOptions::NONE, "scores, =8"), 8);

    let error = get::<String>(&person, QueryOptions::NONE, "tags, city=Lima").unwrap_err();
    assert_eq!(error.root().detail(), "[slice filter] no elem by key: city=Lima");
}

#[test]
fn sequence_targets() {
    let person = person();
    assert_eq!(must::<Vec<u8>>(&person, QueryOptions::NONE, "scores"), [7, 8, 9]);
    assert!(get::<Vec<u8>>(&person, QueryOptions::STRICT_TYPE, "scores").is_err());
    assert!(must::<Vec<String>>(&person, QueryOptions::NONE, "name").is_empty());
}

// -----------------------------------------------------------------------------
// Maps

#[test]
fn map_values() {
    let person = person();
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "meta, addr, Country"), "Malawi");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, r"meta, e\,f"), "e,f");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "META, ADDR, COUNTRY"), "Malawi");
    assert_eq!(must::<i64>(&person, QueryOptions::NONE, "meta, b"), 1);

    let error =
        get::<String>(&person, QueryOptions::CASE_SENSITIVE, "meta, ADDR").unwrap_err();
    assert_eq!(error.root().detail(), "[map] value not found by key ADDR");
}

#[test]
fn map_targets() {
    let person = person();
    let map: HashMap<String, Value> = must(&person, QueryOptions::NONE, "meta, addr");
    assert_eq!(map.len(), 2);
    assert_eq!(map["country"], "Malawi");
    assert_eq!(map["city"], "Mesa");

    let sorted: BTreeMap<String, String> = must(&person, QueryOptions::NONE, "address");
    assert_eq!(sorted.keys().collect::<Vec<_>>(), ["city", "country"]);

    let error = get::<HashMap<i64, Value>>(&person, QueryOptions::NONE, "meta, addr").unwrap_err();
    assert_eq!(error.code(), ErrorCode::TypeMismatch);
    assert!(
        error
            .detail()
            .starts_with("cannot convert result {Malawi Mesa 123 Main St <nil>} to ")
    );
}

// -----------------------------------------------------------------------------
// Conversions

#[test]
fn best_effort_and_strict() {
    let person = person();
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "age"), "30");
    assert_eq!(must::<f64>(&person, QueryOptions::NONE, "age"), 30.0);
    assert!(must::<bool>(&person, QueryOptions::NONE, "age"));
    assert_eq!(get::<i64>(&person, QueryOptions::NONE, "name"), Ok(0));

    let error = get::<i64>(&person, QueryOptions::STRICT_TYPE, "name").unwrap_err();
    assert_eq!(error.code(), ErrorCode::TypeMismatch);
    assert_eq!(
        error.detail(),
        "result type not match: need i64 got alloc::string::String"
    );

    let error = get::<bool>(&person, QueryOptions::STRICT_TYPE, "age").unwrap_err();
    assert!(error.is_type_mismatch());

    let name: String = must(&person, QueryOptions::STRICT_TYPE, "name");
    assert_eq!(name, person.name);

    let text = String::from("30");
    assert_eq!(get::<i64>(&text, QueryOptions::NONE, QueryPath::default()), Ok(30));
    let error = get::<i64>(&text, QueryOptions::STRICT_TYPE, QueryPath::default()).unwrap_err();
    assert!(error.is_type_mismatch());
}

#[test]
fn complex_truth() {
    let zero = Complex64::new(0.0, 0.0);
    assert!(must::<bool>(&zero, QueryOptions::NONE, QueryPath::default()));

    let one = Complex64::new(1.0, 0.0);
    assert!(!must::<bool>(&one, QueryOptions::NONE, QueryPath::default()));
}

#[test]
fn nil_results() {
    let value = json!({ "c": null });
    let error = any(&value, QueryOptions::NONE, "c").unwrap_err();
    assert_eq!(error.code(), ErrorCode::TypeMismatch);
    assert!(error.detail().ends_with("got <nil>"));

    let error = get::<String>(&value, QueryOptions::NONE, "c").unwrap_err();
    assert!(error.is_type_mismatch());

    // A boxed null is looked through once, its content renders as nil.
    let person = person();
    assert!(any(&person, QueryOptions::NONE, "meta, c").is_ok());
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "meta, c"), "<nil>");
    assert_eq!(must::<String>(&person, QueryOptions::NONE, "address, owner"), "<nil>");
}

#[test]
fn exact_targets() {
    let person = person();
    let Exact(found) = must::<Exact<Address>>(&person, QueryOptions::NONE, "address");
    assert_eq!(found.street, "123 Main St");
    assert!(found.owner.is_none());

    let Exact(found) = must::<Exact<Address>>(&person, QueryOptions::NONE, "tags, last");
    assert_eq!(found.city, "Mesa");

    assert!(get::<Exact<u64>>(&person, QueryOptions::NONE, "age").is_err());
}

// -----------------------------------------------------------------------------
// Entry points

#[test]
fn defaults() {
    let person = person();
    assert_eq!(may::<i64>(&person, QueryOptions::NONE, "nope"), 0);
    assert_eq!(may::<String>(&person, QueryOptions::NONE, "nope"), "");
    assert_eq!(get_or::<i64>(&person, 7, "nope"), 7);
    assert_eq!(get_or::<i64>(&person, 7, "age"), 30);
}

#[test]
#[should_panic(expected = "QueryError[1]: [struct] value not found by field nope")]
fn must_panics() {
    must::<i64>(&person(), QueryOptions::NONE, "nope");
}

#[test]
fn method_forms() {
    let person = person();
    assert_eq!(person.query_as::<String>(QueryOptions::NONE, "tags, 0").unwrap(), "tag1");
    assert_eq!(person.query_may::<u64>(QueryOptions::NONE, "scores, 9"), 0);
    assert_eq!(person.query_must::<u64>(QueryOptions::NONE, "scores, last"), 9);
    assert_eq!(person.query_or::<String>("x".to_string(), "meta, zz"), "x");

    let found = person.query_any(QueryOptions::NONE, "tags, 0").unwrap();
    assert_eq!(found.downcast_ref::<&str>(), Some(&"tag1"));

    let value: &dyn Reflect = &person;
    let resolved = value.query(QueryOptions::NONE, "scores, 1");
    assert!(resolved.is_ok());
    assert_eq!(resolved.value().unwrap().downcast_ref::<u8>(), Some(&8));
}
