use logbook::dog::Dog;
use logbook::logger::{log, Severity::*};
use logbook::operations::add;

fn main() {
    let result = add(2, 70);
    println!("Result: {}", result);

    let dog = Dog::new("Flitzy");
    dog.print_info();

    log("Hello There", FatalError);
    log("Im Clement", Warning);
    log("Check if that works well or not !!!", Message);
}
