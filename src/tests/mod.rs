use cynic::{MutationBuilder as _, QueryBuilder as _};

use crate::catalog::Catalog;
use crate::client::{
    AddAuthor, AddAuthorArguments, AddBook, AddBookArguments, AllAuthors, AllBooks, AuthorById,
    AuthorSummary, BookById, BookSummary, Client, IdArguments,
};
use crate::datamodel::ALL_BOOKS;
use crate::server::GRAPHQL_PATH;


fn client_for(server: &testserver::Server) -> Client {
    Client::new(server.url(GRAPHQL_PATH))
}

#[tokio::test]
async fn test_books_over_http() {
    let server = testserver::Server::start(Catalog::seeded());
    let client = client_for(&server);

    let res = client.run(AllBooks::build(())).await.unwrap();
    assert!(res.errors.is_none(), "{:?}", res.errors);

    let books = res.data.unwrap().books.unwrap();
    let names: Vec<_> = books.iter().flatten().map(|b| b.name.as_str()).collect();
    let seed: Vec<_> = ALL_BOOKS.iter().map(|b| &*b.name).collect();
    assert_eq!(names, seed);

    let first = books[0].as_ref().unwrap();
    assert_eq!(
        first.author,
        Some(AuthorSummary {
            id: 1,
            name: "J. K. Rowling".into()
        })
    );
}

#[tokio::test]
async fn test_author_lookup_over_http() {
    let server = testserver::Server::start(Catalog::seeded());
    let client = client_for(&server);

    let res = client
        .run(AuthorById::build(IdArguments { id: Some(3) }))
        .await
        .unwrap();
    let author = res.data.unwrap().author.unwrap();

    assert_eq!(author.name, "Brent Weeks");
    assert_eq!(
        author.books.unwrap(),
        vec![
            Some(BookSummary {
                id: 7,
                name: "The Way of Shadows".into()
            }),
            Some(BookSummary {
                id: 8,
                name: "Beyond the Shadows".into()
            }),
        ]
    );

    let res = client
        .run(AuthorById::build(IdArguments { id: Some(42) }))
        .await
        .unwrap();
    assert!(res.errors.is_none());
    assert!(res.data.unwrap().author.is_none());
}

#[tokio::test]
async fn test_mutations_over_http() {
    let server = testserver::Server::start(Catalog::seeded());
    let client = client_for(&server);

    let res = client
        .run(AddAuthor::build(AddAuthorArguments {
            name: "N. K. Jemisin".into(),
        }))
        .await
        .unwrap();
    let author = res.data.unwrap().add_author.unwrap();
    assert_eq!(author.id, 4);
    assert_eq!(author.books, Some(vec![]));

    let res = client
        .run(AddBook::build(AddBookArguments {
            name: "The Fifth Season".into(),
            author_id: author.id,
        }))
        .await
        .unwrap();
    let book = res.data.unwrap().add_book.unwrap();
    assert_eq!(book.id, 9);

    let res = client
        .run(BookById::build(IdArguments { id: Some(book.id) }))
        .await
        .unwrap();
    let fetched = res.data.unwrap().book.unwrap();
    assert_eq!(fetched.name, "The Fifth Season");
    assert_eq!(fetched.author_id, 4);
    assert_eq!(fetched.author.unwrap().name, "N. K. Jemisin");

    let res = client.run(AllAuthors::build(())).await.unwrap();
    let authors = res.data.unwrap().authors.unwrap();
    let last = authors.last().unwrap().as_ref().unwrap();
    assert_eq!(last.name, "N. K. Jemisin");
    assert_eq!(
        last.books,
        Some(vec![Some(BookSummary {
            id: 9,
            name: "The Fifth Season".into()
        })])
    );
}

#[tokio::test]
async fn test_graphiql_served_on_same_path() {
    let server = testserver::Server::start(Catalog::seeded());

    let res = reqwest::get(server.url(GRAPHQL_PATH)).await.unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    assert!(body.to_lowercase().contains("graphiql"));
}
