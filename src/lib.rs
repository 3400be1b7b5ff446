// chirpy_server library: domains, shared infrastructure and the router
pub mod domains;
pub mod shared;
pub mod routes;
pub mod openapi;
