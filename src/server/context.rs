use async_graphql::Context;

use crate::catalog::Catalog;

pub trait CatalogContext {
    fn catalog(&self) -> &Catalog;
}

impl CatalogContext for Context<'_> {
    fn catalog(&self) -> &Catalog {
        // `build_schema` always registers the catalog as schema data.
        self.data_unchecked::<Catalog>()
    }
}
