use crate::router::Route;
use yew_router::navigator::Navigator;

/// User facing channel for success and error messages.
pub trait Notify {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait Navigate {
    fn navigate(&self, route: Route);
}

impl Navigate for Navigator {
    fn navigate(&self, route: Route) {
        self.push(&route);
    }
}
