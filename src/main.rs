use sortkit::people::{ByAge, Roster, sample};
use sortkit::prelude::*;

fn main() {
    let mut people = ByAge(sample());
    println!("{}", Roster(&people.0));

    // Reusable ordering type: ByAge knows how to compare by age.
    sort(&mut people);
    println!("{}", Roster(&people.0));

    // Inline comparison: no named type, and any ordering ByAge defines is ignored.
    let mut people = people.0;
    sort_slice_by(&mut people, |a, b| a.age > b.age);
    println!("{}", Roster(&people));
}
