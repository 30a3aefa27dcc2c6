/// A named dog that announces its construction and destruction on stdout.
#[derive(Debug)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        let dog = Dog { name: name.into() };
        println!("Constructor for Dog {} called.", dog.name);
        dog
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn info(&self) -> String {
        format!("Dog [ name : {} ]", self.name)
    }

    pub fn print_info(&self) {
        println!("{}", self.info());
    }
}

impl Default for Dog {
    fn default() -> Self {
        Dog {
            name: "Puffy".to_string(),
        }
    }
}

impl Drop for Dog {
    fn drop(&mut self) {
        println!("Destructor of dog {} called", self.name);
    }
}
