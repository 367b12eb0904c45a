mod rejection;

pub use self::rejection::*;
use crate::entity::{
    Book, BookAuthor, BookId, BookTitle, Isbn, Member, MemberEmail, MemberId, MemberName,
    SearchQuery,
};
use indexmap::map::Entry;
use indexmap::IndexMap;
use uuid::Uuid;

/// Books and members of the library. Every change to either side goes through here so a loan
/// is always recorded on the book and the member together.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Catalog {
    books: IndexMap<BookId, Book>,
    members: IndexMap<MemberId, Member>,
}

impl Catalog {
    /// Registers a new book under an id no other book holds.
    pub fn add_book(
        &mut self,
        title: BookTitle,
        author: BookAuthor,
        isbn: Isbn,
        copies: i32,
    ) -> &Book {
        let mut book = Book::create(title, author, isbn, copies);
        while self.books.contains_key(book.id()) {
            book = book.reconstruct(|b| b.id = BookId::new(Uuid::new_v4()));
        }
        self.books.entry(*book.id()).or_insert(book)
    }

    pub fn add_member(&mut self, name: MemberName, email: MemberEmail) -> &Member {
        let mut member = Member::create(name, email);
        while self.members.contains_key(member.id()) {
            member = member.reconstruct(|m| m.id = MemberId::new(Uuid::new_v4()));
        }
        self.members.entry(*member.id()).or_insert(member)
    }

    /// Inserts a book rebuilt elsewhere (e.g. from storage). `None` if the id is already taken,
    /// in which case the catalog is left as it was.
    pub fn insert_book(&mut self, book: Book) -> Option<&Book> {
        match self.books.entry(*book.id()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => Some(entry.insert(book)),
        }
    }

    pub fn insert_member(&mut self, member: Member) -> Option<&Member> {
        match self.members.entry(*member.id()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => Some(entry.insert(member)),
        }
    }

    pub fn contains_book(&self, id: &BookId) -> bool {
        self.books.contains_key(id)
    }

    pub fn contains_member(&self, id: &MemberId) -> bool {
        self.members.contains_key(id)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn find_book(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn find_member(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn search_by_title(&self, query: &SearchQuery) -> Vec<&Book> {
        self.books()
            .filter(|book| {
                let title: &String = book.title().as_ref();
                query.matches(title)
            })
            .collect()
    }

    pub fn search_by_author(&self, query: &SearchQuery) -> Vec<&Book> {
        self.books()
            .filter(|book| {
                let author: &String = book.author().as_ref();
                query.matches(author)
            })
            .collect()
    }

    pub fn books_with_isbn(&self, isbn: &Isbn) -> Vec<&Book> {
        self.books().filter(|book| book.isbn() == isbn).collect()
    }

    pub fn borrow_book(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> Result<(), LoanRejection> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or(LoanRejection::UnknownMember)?;
        let book = self
            .books
            .get_mut(book_id)
            .ok_or(LoanRejection::UnknownBook)?;
        if !book.borrow() {
            return Err(LoanRejection::NoCopiesAvailable);
        }
        member.record_borrow(*book_id);
        Ok(())
    }

    pub fn return_book(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> Result<(), LoanRejection> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or(LoanRejection::UnknownMember)?;
        let book = self
            .books
            .get_mut(book_id)
            .ok_or(LoanRejection::UnknownBook)?;
        if !member.has_borrowed(book_id) {
            return Err(LoanRejection::NotBorrowed);
        }
        if !book.give_back() {
            return Err(LoanRejection::NothingOnLoan);
        }
        member.record_return(book_id);
        Ok(())
    }

    pub fn add_copies(&mut self, book_id: &BookId, count: i32) -> Option<&Book> {
        let book = self.books.get_mut(book_id)?;
        book.add_copies(count);
        Some(book)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entity::BookCopies;

    fn add_book(catalog: &mut Catalog, title: &str, author: &str, isbn: &str, copies: i32) -> BookId {
        *catalog
            .add_book(
                BookTitle::new(title),
                BookAuthor::new(author),
                Isbn::new(isbn),
                copies,
            )
            .id()
    }

    fn add_member(catalog: &mut Catalog) -> MemberId {
        *catalog
            .add_member(MemberName::new("Paul"), MemberEmail::new("paul@example.com"))
            .id()
    }

    fn available(catalog: &Catalog, id: &BookId) -> u32 {
        catalog.find_book(id).map(|book| book.copies().available()).unwrap()
    }

    fn loans(catalog: &Catalog, id: &MemberId) -> Vec<BookId> {
        catalog.find_member(id).map(|m| m.borrowed_book_ids().clone()).unwrap()
    }

    #[test]
    fn dune_scenario() {
        let mut catalog = Catalog::default();
        let dune = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 2);
        let other = add_book(&mut catalog, "Emma", "Austen", "ISBN2", 1);
        let member = add_member(&mut catalog);
        assert_eq!(available(&catalog, &dune), 2);

        assert_eq!(catalog.borrow_book(&member, &dune), Ok(()));
        assert_eq!(catalog.borrow_book(&member, &dune), Ok(()));
        assert_eq!(available(&catalog, &dune), 0);

        assert_eq!(
            catalog.borrow_book(&member, &dune),
            Err(LoanRejection::NoCopiesAvailable)
        );
        assert_eq!(available(&catalog, &dune), 0);
        assert_eq!(loans(&catalog, &member), vec![dune, dune]);

        assert_eq!(catalog.return_book(&member, &dune), Ok(()));
        assert_eq!(available(&catalog, &dune), 1);

        assert_eq!(
            catalog.return_book(&member, &other),
            Err(LoanRejection::NotBorrowed)
        );
        assert_eq!(available(&catalog, &dune), 1);
        assert_eq!(available(&catalog, &other), 1);
    }

    #[test]
    fn borrow_then_return_restores_state() {
        let mut catalog = Catalog::default();
        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 3);
        let member = add_member(&mut catalog);
        let before = catalog.clone();

        catalog.borrow_book(&member, &book).unwrap();
        assert_eq!(loans(&catalog, &member), vec![book]);
        catalog.return_book(&member, &book).unwrap();

        assert!(loans(&catalog, &member).is_empty());
        assert_eq!(available(&catalog, &book), 3);
        assert_eq!(catalog, before);
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let mut catalog = Catalog::default();
        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let member = add_member(&mut catalog);
        let before = catalog.clone();

        let stranger = MemberId::new(Uuid::new_v4());
        let missing = BookId::new(Uuid::new_v4());
        assert_eq!(catalog.borrow_book(&stranger, &book), Err(LoanRejection::UnknownMember));
        assert_eq!(catalog.borrow_book(&member, &missing), Err(LoanRejection::UnknownBook));
        assert_eq!(catalog.return_book(&stranger, &book), Err(LoanRejection::UnknownMember));
        assert_eq!(catalog.return_book(&member, &missing), Err(LoanRejection::UnknownBook));
        assert_eq!(catalog, before);
    }

    #[test]
    fn return_of_foreign_loan_keeps_availability() {
        let mut catalog = Catalog::default();
        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 2);
        let borrower = add_member(&mut catalog);
        let bystander = add_member(&mut catalog);

        catalog.borrow_book(&borrower, &book).unwrap();
        assert_eq!(
            catalog.return_book(&bystander, &book),
            Err(LoanRejection::NotBorrowed)
        );
        assert_eq!(available(&catalog, &book), 1);
        assert_eq!(loans(&catalog, &borrower), vec![book]);
    }

    #[test]
    fn availability_stays_within_bounds() {
        let mut catalog = Catalog::default();
        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let member = add_member(&mut catalog);

        for step in 0..20 {
            match step % 4 {
                0 | 1 => {
                    let _ = catalog.borrow_book(&member, &book);
                }
                2 => {
                    let _ = catalog.return_book(&member, &book);
                }
                _ => {
                    catalog.add_copies(&book, step % 3 - 1);
                }
            }
            let copies = *catalog.find_book(&book).unwrap().copies();
            assert!(copies.available() <= copies.total());
            assert_eq!(
                copies.on_loan() as usize,
                loans(&catalog, &member).len()
            );
        }
    }

    #[test]
    fn searches_are_case_insensitive() {
        let mut catalog = Catalog::default();
        let dune = add_book(&mut catalog, "Dune", "Frank Herbert", "ISBN1", 1);
        let messiah = add_book(&mut catalog, "Dune Messiah", "Frank Herbert", "ISBN2", 1);
        add_book(&mut catalog, "Emma", "Jane Austen", "ISBN3", 1);

        let ids = |books: Vec<&Book>| books.into_iter().map(|b| *b.id()).collect::<Vec<_>>();

        assert_eq!(ids(catalog.search_by_title(&SearchQuery::new("dUNE"))), vec![dune, messiah]);
        assert_eq!(ids(catalog.search_by_author(&SearchQuery::new("HERB"))), vec![dune, messiah]);
        assert_eq!(catalog.search_by_title(&SearchQuery::new("")).len(), 3);
        assert!(catalog.search_by_author(&SearchQuery::new("tolkien")).is_empty());

        let query = SearchQuery::new("e");
        assert_eq!(ids(catalog.search_by_title(&query)), ids(catalog.search_by_title(&query)));
    }

    #[test]
    fn duplicate_isbns_are_kept_as_distinct_books() {
        let mut catalog = Catalog::default();
        let first = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let second = add_book(&mut catalog, "Dune (reprint)", "Herbert", "ISBN1", 1);

        assert_eq!(catalog.book_count(), 2);
        let same = catalog.books_with_isbn(&Isbn::new("ISBN1"));
        assert_eq!(same.len(), 2);
        assert!(same[0].same_isbn(same[1]));
        assert_ne!(first, second);
    }

    #[test]
    fn add_copies_to_unknown_book_is_none() {
        let mut catalog = Catalog::default();
        assert!(catalog.add_copies(&BookId::new(Uuid::new_v4()), 2).is_none());

        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let updated = catalog.add_copies(&book, 2).unwrap();
        assert_eq!(updated.copies().total(), 3);
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let mut catalog = Catalog::default();
        let ids = (0..5)
            .map(|n| add_book(&mut catalog, &format!("Book {n}"), "Anon", "ISBN", 1))
            .collect::<Vec<_>>();
        let listed = catalog.books().map(|b| *b.id()).collect::<Vec<_>>();
        assert_eq!(listed, ids);
    }

    #[test]
    fn insert_never_replaces_an_existing_id() {
        let mut catalog = Catalog::default();
        let book = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let member = add_member(&mut catalog);
        catalog.borrow_book(&member, &book).unwrap();
        let before = catalog.clone();

        let fresh = Book::new(
            book,
            BookTitle::new("Dune"),
            BookAuthor::new("Herbert"),
            Isbn::new("ISBN1"),
            BookCopies::new(1),
        );
        assert!(catalog.insert_book(fresh).is_none());
        let stranger = Member::new(
            member,
            MemberName::new("Feyd"),
            MemberEmail::new("feyd@example.com"),
            Vec::new(),
        );
        assert!(catalog.insert_member(stranger).is_none());
        assert_eq!(catalog, before);

        assert_eq!(catalog.return_book(&member, &book), Ok(()));
        assert_eq!(available(&catalog, &book), 1);
        assert!(loans(&catalog, &member).is_empty());
    }

    #[test]
    fn return_without_a_copy_out_changes_nothing() {
        let mut catalog = Catalog::default();
        let book = Book::create(
            BookTitle::new("Dune"),
            BookAuthor::new("Herbert"),
            Isbn::new("ISBN1"),
            2,
        );
        let book_id = *book.id();
        catalog.insert_book(book).unwrap();
        let member = Member::new(
            MemberId::new(Uuid::new_v4()),
            MemberName::new("Paul"),
            MemberEmail::new("paul@example.com"),
            vec![book_id],
        );
        let member_id = *member.id();
        catalog.insert_member(member).unwrap();
        let before = catalog.clone();

        assert_eq!(
            catalog.return_book(&member_id, &book_id),
            Err(LoanRejection::NothingOnLoan)
        );
        assert_eq!(catalog, before);
    }

    #[test]
    fn added_entities_get_distinct_ids() {
        let mut catalog = Catalog::default();
        let first = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        let second = add_book(&mut catalog, "Dune", "Herbert", "ISBN1", 1);
        assert_ne!(first, second);
        assert_ne!(add_member(&mut catalog), add_member(&mut catalog));
        assert_eq!(catalog.member_count(), 2);
    }
}
