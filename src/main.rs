use dlist_rs::arg::Arg;
use dlist_rs::{concat, reverse, verify, DList};

extern crate env_logger;

use log::info;

fn main() {
    env_logger::init();
    let arg = Arg::parse();

    let mut list = DList::new();
    for i in 0..arg.get_count() as i64 {
        list.push_back(i);
    }
    verify(&list).unwrap();
    info!("built {} elements: {:?}", list.len(), list);

    // splice a batch after the saved middle node
    let middle = list.at(arg.get_count() as i64 / 2);
    for i in 0..arg.get_inserts() as i64 {
        list.insert(middle, 100 + i);
        verify(&list).unwrap();
    }
    info!("after middle inserts: {:?}", list);

    list.remove(middle);
    list.remove(list.head());
    list.remove(list.tail());
    verify(&list).unwrap();
    info!("after removes: {:?}", list);

    let reversed = reverse(&list);
    let doubled = concat(&list, &reversed);
    verify(&reversed).unwrap();
    verify(&doubled).unwrap();

    println!("list     ({:3}): {:?}", list.len(), list);
    println!("reversed ({:3}): {:?}", reversed.len(), reversed);
    println!("doubled  ({:3}): {:?}", doubled.len(), doubled);
}
