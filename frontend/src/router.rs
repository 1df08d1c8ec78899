use yew_router::prelude::*;

// Router accepts only literals, so static_routes are used in tests
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/digital-library")]
    DigitalLibrary,
    #[at("/admin/digital-library/create")]
    CreateResource,
    #[at("/admin/digital-library/:id/edit")]
    EditResource { id: String },
    #[at("/401")]
    Unauthorized,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use static_routes::*;
    use yew_router::Routable;

    use super::Route;

    fn map_to_one_another(frontend_defined_route: impl Routable, static_route: impl Get) {
        assert_eq!(
            frontend_defined_route.to_path(),
            static_route.get().complete()
        );
    }

    #[test]
    fn test_local_routes_map_to_static_routes() {
        let routes = routes().root;
        let edit = routes.admin.edit_resource("7");

        map_to_one_another(Route::Home, routes.home);
        map_to_one_another(Route::Unauthorized, routes.unauthorized);
        map_to_one_another(Route::DigitalLibrary, routes.digital_library);
        map_to_one_another(Route::CreateResource, routes.admin.create_resource);
        map_to_one_another(Route::EditResource { id: "7".into() }, edit);
    }

    #[test]
    fn test_edit_route_recognizes_id() {
        assert_eq!(
            Route::recognize("/admin/digital-library/42/edit"),
            Some(Route::EditResource { id: "42".into() })
        );
    }
}
