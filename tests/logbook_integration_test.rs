use std::process::Command;

fn run_demo() -> Vec<String> {
    let output = Command::new(env!("CARGO_BIN_EXE_logbook"))
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_demo_output_in_order() {
    let lines = run_demo();

    assert_eq!(
        lines,
        vec![
            "Result: 72",
            "Constructor for Dog Flitzy called.",
            "Dog [ name : Flitzy ]",
            "Fatal Error: Hello There",
            "Warning: Im Clement",
            "Message: Check if that works well or not !!!",
            "Destructor of dog Flitzy called",
        ]
    );
}

#[test]
fn test_demo_is_repeatable() {
    assert_eq!(run_demo(), run_demo());
}
