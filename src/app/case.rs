use crate::app::outcome::Verdict;
use std::fmt;

/// A named, zero-argument unit of work. The body is opaque to the runner and
/// is expected to wrap whatever driver calls its section exercises; it reports
/// back through a [`Verdict`].
pub struct TestCase {
    name: String,
    body: Box<dyn Fn() -> Verdict>,
}

impl TestCase {
    pub fn new<N, F>(name: N, body: F) -> Self
    where
        N: Into<String>,
        F: Fn() -> Verdict + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self) -> Verdict {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}
