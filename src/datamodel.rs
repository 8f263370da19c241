use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: Cow<'static, str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: Cow<'static, str>,
    pub author_id: i32,
}

pub static ALL_AUTHORS: &[Author] = &[
    Author {
        id: 1,
        name: Cow::Borrowed("J. K. Rowling"),
    },
    Author {
        id: 2,
        name: Cow::Borrowed("J. R. R. Tolkien"),
    },
    Author {
        id: 3,
        name: Cow::Borrowed("Brent Weeks"),
    },
];

pub static ALL_BOOKS: &[Book] = &[
    Book {
        id: 1,
        name: Cow::Borrowed("Harry Potter and the Chamber of Secrets"),
        author_id: 1,
    },
    Book {
        id: 2,
        name: Cow::Borrowed("Harry Potter and the Prisoner of Azkaban"),
        author_id: 1,
    },
    Book {
        id: 3,
        name: Cow::Borrowed("Harry Potter and the Goblet of Fire"),
        author_id: 1,
    },
    Book {
        id: 4,
        name: Cow::Borrowed("The Fellowship of the Ring"),
        author_id: 2,
    },
    Book {
        id: 5,
        name: Cow::Borrowed("The Two Towers"),
        author_id: 2,
    },
    Book {
        id: 6,
        name: Cow::Borrowed("The Return of the King"),
        author_id: 2,
    },
    Book {
        id: 7,
        name: Cow::Borrowed("The Way of Shadows"),
        author_id: 3,
    },
    Book {
        id: 8,
        name: Cow::Borrowed("Beyond the Shadows"),
        author_id: 3,
    },
];
