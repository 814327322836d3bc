mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod product_new;
pub use product_new::ProductNew;
