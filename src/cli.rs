pub const DEFAULT_FIRST_NAME: &str = "Sabrine";
pub const DEFAULT_LAST_NAME: &str = "Kammoun";
pub const DEFAULT_CIN: &str = "1234567";
pub const DEFAULT_TARGET: &str = "localhost:50051";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetArgs {
    pub first_name: String,
    pub last_name: String,
    pub cin: String,
    pub target: String,
}

impl Default for GreetArgs {
    fn default() -> Self {
        GreetArgs {
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            cin: DEFAULT_CIN.to_string(),
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl GreetArgs {
    // tonic wants a scheme on the target; the CLI takes a bare host:port
    pub fn endpoint(&self) -> String {
        if self.target.contains("://") {
            self.target.clone()
        } else {
            format!("http://{}", self.target)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(GreetArgs),
    Help,
}

pub fn parse<I>(args: I) -> Invocation
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    if args.first().map(String::as_str) == Some("--help") {
        return Invocation::Help;
    }

    let mut parsed = GreetArgs::default();
    if let Some(v) = args.get(0) {
        parsed.first_name = v.clone();
    }
    if let Some(v) = args.get(1) {
        parsed.last_name = v.clone();
    }
    if let Some(v) = args.get(2) {
        parsed.cin = v.clone();
    }
    if let Some(v) = args.get(3) {
        parsed.target = v.clone();
    }
    Invocation::Run(parsed)
}

pub fn usage() -> String {
    format!(
        "Usage: client [firstName [lastName [cin [target]]]]\n\
         \n\
         \x20 firstName   The first name of the person you wish to be greeted by. Defaults to {}\n\
         \x20 lastName    The last name of the person you wish to be greeted by. Defaults to {}\n\
         \x20 cin         The Client Identification Number (CIN) of the person. Defaults to {}\n\
         \x20 target      The server to connect to. Defaults to {}\n",
        DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME, DEFAULT_CIN, DEFAULT_TARGET
    )
}
