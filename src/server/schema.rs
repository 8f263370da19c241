use async_graphql::{ComplexObject, Context, Object, SimpleObject};

use crate::datamodel;

use super::context::CatalogContext;

/// represents a book written by some author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    id: i32,
    name: String,
    author_id: i32,
}

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.catalog().author(self.author_id).map(Into::into)
    }
}

impl From<datamodel::Book> for Book {
    fn from(book: datamodel::Book) -> Self {
        Self {
            id: book.id,
            name: book.name.into_owned(),
            author_id: book.author_id,
        }
    }
}

/// represents an author who has written some books
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        nullable_list(ctx.catalog().books_by(self.id))
    }
}

impl From<datamodel::Author> for Author {
    fn from(author: datamodel::Author) -> Self {
        Self {
            id: author.id,
            name: author.name.into_owned(),
        }
    }
}

/// Lists are exposed as `[T]`, nullable at both levels.
fn nullable_list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(item.into())).collect())
}

pub struct QueryRoot;

/// Root query
#[Object(name = "Query")]
impl QueryRoot {
    /// singular book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        ctx.catalog().book(id?).map(Into::into)
    }

    /// list of all books
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        nullable_list(ctx.catalog().books())
    }

    /// single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        ctx.catalog().author(id?).map(Into::into)
    }

    /// list of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Option<Author>>> {
        nullable_list(ctx.catalog().authors())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let book = ctx.catalog().add_book(name, author_id)?;
        Ok(Some(book.into()))
    }

    /// Add author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let author = ctx.catalog().add_author(name)?;
        Ok(Some(author.into()))
    }
}
