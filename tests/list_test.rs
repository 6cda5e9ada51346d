#[macro_use]
extern crate log;

mod common;

use common::*;
use llist::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Copy, Clone)]
struct TestCase {
    name: &'static str,
    func: fn() -> TestResult,
}

const TEST_CASES: &'static [TestCase] = &[
    TestCase { name: "int walkthrough", func: test_int_walkthrough },
    TestCase { name: "negative indexing", func: test_negative_indexing },
    TestCase { name: "append at boundary", func: test_append_at_boundary },
    TestCase { name: "middle insertion links", func: test_middle_insertion_links },
    TestCase { name: "handle removal", func: test_handle_removal },
    TestCase { name: "clear twice", func: test_clear_twice },
    TestCase { name: "string round trip", func: test_string_round_trip },
    TestCase { name: "custom payload release", func: test_custom_payload_release },
    TestCase { name: "distinct conversion errors", func: test_distinct_conversion_errors },
];

#[test]
fn test_main() {
    test_init_logger();
    let mut failed = vec![];
    for test in TEST_CASES.iter() {
        match (test.func)() {
            Ok(()) => error!("{} .. ok", test.name),
            Err(e) => failed.push(format!("\n{}: \n{}\n", test.name, e)),
        }
    }
    if !failed.is_empty() {
        panic!("{}", failed.concat());
    }
}

fn ints(list: &List) -> Vec<i32> {
    list.iter().filter_map(|v| v.as_int()).collect()
}

// walks both directions and checks both walks agree with len()
fn walk_len(list: &List) -> TestResult {
    let mut forward = vec![];
    let mut node = list.get_node(0);
    while let Some(n) = node {
        forward.push(n.handle());
        node = n.next();
    }
    let mut backward = vec![];
    let mut node = list.get_node(-1);
    while let Some(n) = node {
        backward.push(n.handle());
        node = n.prev();
    }
    backward.reverse();
    compare(list.len(), forward.len())?;
    compare(forward, backward)
}

fn test_int_walkthrough() -> TestResult {
    let mut list = List::new(ElementKind::Int);
    list.add(0, 5)?;
    compare(vec![5], ints(&list))?;
    list.add(0, 3)?;
    compare(vec![3, 5], ints(&list))?;
    list.add(-1, 9)?;
    compare(vec![3, 5, 9], ints(&list))?;
    list.remove(1)?;
    compare(vec![3, 9], ints(&list))?;
    compare(2, list.len())?;
    compare(Some(Value::Int(9)), list.get(-1))?;
    walk_len(&list)
}

fn test_negative_indexing() -> TestResult {
    let list = List::from_elements(vec![4, 5, 6, 7, 8])?;
    let n = list.len() as isize;
    compare(list.get(n - 1), list.get(-1))?;
    compare(list.get(0), list.get(-n))?;
    is_none(list.get(-(n + 1)))?;
    is_none(list.resolve_index(n))?;
    compare(Err(ListError::IndexOutOfRange { index: -6, len: 5 }), list.clone().remove(-6))
}

fn test_append_at_boundary() -> TestResult {
    let mut list = List::new(ElementKind::Double);
    for n in 0..10 {
        list.add(n, n as f64)?;
        compare(Some(Value::Double(n as f64)), list.get(-1))?;
    }
    compare(10, list.len())?;
    walk_len(&list)
}

fn test_middle_insertion_links() -> TestResult {
    let mut list = List::from_elements(vec![1, 2, 3])?;
    let old = list.resolve_index(1);
    let new = list.add(1, 42)?;
    compare(4, list.len())?;
    compare(Some(new), list.next(list.resolve_index(0).ok_or("no head")?))?;
    compare(list.resolve_index(0), list.prev(new))?;
    compare(old, list.next(new))?;
    walk_len(&list)
}

fn test_handle_removal() -> TestResult {
    let mut list = List::from_elements(b"abcd".iter().cloned())?;
    let handles: Vec<NodeHandle> = list.iter_nodes().map(|n| n.handle()).collect();

    compare(Ok(Value::Char(b'd')), list.detach(handles[3]))?;
    let tail = list.get_node(-1).ok_or("no tail")?;
    compare(handles[2], tail.handle())?;
    is_none(tail.next())?;

    compare(Ok(Value::Char(b'b')), list.detach(handles[1]))?;
    compare(b"ac\0".to_vec(), list_to_string(&list)?)?;
    compare(Err(ListError::StaleHandle), list.detach(handles[1]))?;

    list.remove(0)?;
    list.remove(0)?;
    compare(0, list.len())?;
    is_none(list.get_node(0))?;
    walk_len(&list)
}

fn test_clear_twice() -> TestResult {
    let mut list = List::from_elements(vec![1.0f32, 2.0, 3.0])?;
    list.clear();
    compare(0, list.len())?;
    list.clear();
    compare(0, list.len())?;
    is_none(list.front())?;
    is_none(list.back())?;
    list.add(7, 1.5f32)?;
    compare(Some(1.5f32), list.get_as::<f32>(0))?;
    list.destroy();
    Ok(())
}

fn test_string_round_trip() -> TestResult {
    let list = string_to_list(b"hi\0", UNTIL_TERMINATOR)?;
    compare(2, list.len())?;
    compare(Some(b'h'), list.get_as::<u8>(0))?;
    compare(Some(b'i'), list.get_as::<u8>(1))?;
    compare(b"hi\0".to_vec(), list_to_string(&list)?)?;

    let s = b"the quick brown fox\0";
    compare(s.to_vec(), list_to_string(&string_to_list(s, UNTIL_TERMINATOR)?)?)?;
    compare(b"the\0".to_vec(), duplicate_string(s, 3)?)
}

fn test_custom_payload_release() -> TestResult {
    let released = Rc::new(RefCell::new(vec![]));
    let mut list = List::new(ElementKind::Custom);
    for name in &["alpha", "beta", "gamma"] {
        let p: Payload = Rc::new(name.to_string());
        list.add(-1, p)?;
    }

    let customs = custom_payload_array(&list)?;
    compare(3, customs.len())?;
    compare(Some("beta"), customs[1].downcast_ref::<String>().map(|s| s.as_str()))?;

    let r = Rc::clone(&released);
    list.destroy_with(move |p| {
        if let Some(s) = p.downcast_ref::<String>() {
            r.borrow_mut().push(s.clone());
        }
    });
    let names: Vec<String> = released.borrow().clone();
    compare(vec!["alpha", "beta", "gamma"], names.iter().map(|s| s.as_str()).collect())
}

fn test_distinct_conversion_errors() -> TestResult {
    let empty = List::new(ElementKind::Char);
    compare(Err(ListError::Empty), list_to_string(&empty))?;

    let ints = List::from_elements(vec![1])?;
    compare(
        Err(ListError::KindMismatch {
            expected: ElementKind::Char,
            found: ElementKind::Int,
        }),
        list_to_string(&ints),
    )?;

    compare(Err(ListError::EmptyString), duplicate_string(b"", 4))?;
    compare(
        Err(ListError::Unterminated { scanned: 2 }),
        string_to_list_with(b"ab", UNTIL_TERMINATOR, &Config::new()).map(|l| l.len()),
    )
}
