//! Direct and reflective variants must build the same thing.

use reflect_bench::model::Foo;
use reflect_bench::ops::{chan, collections, funcs, values};
use reflect_bench::reflect::{MapValue, Value};
use reflect_bench::{Fixture, SuiteConfig};
use std::collections::BTreeSet;

#[test]
fn every_pair_agrees_on_the_default_fixture() {
    let fixture = Fixture::default();
    let value = fixture.fill_value();
    let len = fixture.fill_len();

    assert_eq!(
        values::init_var_reflect(value).int().unwrap(),
        values::init_var(value)
    );

    assert_eq!(
        collections::make_slice_and_fill_reflect(len, value)
            .unwrap()
            .to_vec::<i64>()
            .unwrap(),
        collections::make_slice_and_fill(len, value)
    );

    assert_eq!(
        collections::make_map_and_fill_reflect(fixture.keys(), value)
            .unwrap()
            .to_hash_map::<i64, i64>()
            .unwrap(),
        collections::make_map_and_fill(fixture.keys(), value)
    );

    assert_eq!(
        funcs::call_func_reflect(value, value).unwrap(),
        funcs::call_func(value, value)
    );

    assert_eq!(
        funcs::make_func_and_call_reflect(
            &funcs::int_binary_type(),
            &funcs::multiply_impl_fn(),
            value,
            value
        )
        .unwrap(),
        funcs::make_func_and_call(&funcs::multiply_slice, value, value)
    );

    assert_eq!(
        chan::make_chan_and_put_reflect(value).unwrap(),
        chan::make_chan_and_put(value).unwrap()
    );

    let foo = values::new_struct_and_set_field(value);
    let foo_value = values::new_struct_and_set_field_reflect(value).unwrap();
    assert_eq!(foo_value.downcast_ref::<Foo>().unwrap(), &foo);

    assert_eq!(
        values::call_struct_method_reflect(&foo_value, value).unwrap(),
        values::call_struct_method(&foo, value)
    );
}

#[test]
fn key_extraction_is_reproducible_across_runs() {
    let keys = |fixture: &Fixture| -> BTreeSet<i64> {
        let view = MapValue::from_map(&fixture.build_map(100)).unwrap();
        collections::map_keys_reflect(&view)
            .iter()
            .map(|key| key.int().unwrap())
            .collect()
    };

    let first = keys(&Fixture::default());
    let second = keys(&Fixture::default());
    assert_eq!(first.len(), 100);
    assert_eq!(first, second);

    let direct: BTreeSet<i64> = collections::map_keys(&Fixture::default().build_map(100))
        .into_iter()
        .collect();
    assert_eq!(first, direct);
}

#[test]
fn pairs_agree_for_a_smaller_configuration() {
    let config = SuiteConfig {
        seed: 7,
        fixture_len: 20,
        fill_len: 5,
        fill_value: -3,
    };
    let fixture = Fixture::new(&config).unwrap();

    let map = collections::make_map_and_fill_reflect(fixture.keys(), fixture.fill_value())
        .unwrap();
    assert_eq!(map.len(), 5);
    for key in fixture.keys() {
        assert_eq!(map.map_index(&Value::of(*key)), Some(&Value::of(-3i64)));
    }

    let slice = collections::make_slice_and_fill_reflect(fixture.fill_len(), fixture.fill_value())
        .unwrap();
    assert_eq!(slice.to_vec::<i64>().unwrap(), vec![-3; 5]);
}
