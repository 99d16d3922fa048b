/// Logical navigation targets. Each page hands back the route to show
/// next; the main loop is the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    Exit,
}
