/*
 * Responsibility
 * - Public interface of the middlewares
 * - role gate (auth), HTTP layers, CORS, security headers
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
