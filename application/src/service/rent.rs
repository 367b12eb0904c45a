use kernel::prelude::entity::LoanRejection;

use crate::service::SaveCatalogService;
use crate::transfer::RentDto;

#[async_trait::async_trait]
pub trait RentService: 'static + Sync + Send + SaveCatalogService {
    async fn borrow_book(&mut self, dto: RentDto) -> Result<(), LoanRejection> {
        let (member_id, book_id) = dto.ids();
        if let Err(rejection) = self.catalog_mut().borrow_book(&member_id, &book_id) {
            tracing::warn!(member = %member_id, book = %book_id, "Borrow rejected: {rejection}");
            return Err(rejection);
        }
        tracing::info!(member = %member_id, book = %book_id, "Book borrowed");

        self.persist().await;
        Ok(())
    }
}

impl<T> RentService for T where T: SaveCatalogService {}

#[async_trait::async_trait]
pub trait ReturnService: 'static + Sync + Send + SaveCatalogService {
    async fn return_book(&mut self, dto: RentDto) -> Result<(), LoanRejection> {
        let (member_id, book_id) = dto.ids();
        if let Err(rejection) = self.catalog_mut().return_book(&member_id, &book_id) {
            tracing::warn!(member = %member_id, book = %book_id, "Return rejected: {rejection}");
            return Err(rejection);
        }
        tracing::info!(member = %member_id, book = %book_id, "Book returned");

        self.persist().await;
        Ok(())
    }
}

impl<T> ReturnService for T where T: SaveCatalogService {}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::LoanRejection;
    use uuid::Uuid;

    use crate::service::mock::TestLibrary;
    use crate::service::{
        CreateBookService, CreateMemberService, GetBookService, GetMemberService, RentService,
        ReturnService,
    };
    use crate::transfer::{
        BookDto, CreateBookDto, CreateMemberDto, GetBookDto, GetMemberDto, MemberDto, RentDto,
    };

    async fn setup(copies: i32) -> (TestLibrary, MemberDto, BookDto) {
        let mut library = TestLibrary::default();
        let book = library
            .add_book(CreateBookDto {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                isbn: "ISBN1".to_string(),
                copies,
            })
            .await;
        let member = library
            .add_member(CreateMemberDto {
                name: "Paul".to_string(),
                email: "paul@example.com".to_string(),
            })
            .await;
        (library, member, book)
    }

    fn available(library: &TestLibrary, book: &BookDto) -> u32 {
        library
            .find_book(GetBookDto { id: book.id })
            .unwrap()
            .available_copies
    }

    fn loans(library: &TestLibrary, member: &MemberDto) -> Vec<Uuid> {
        library
            .find_member(GetMemberDto { id: member.id })
            .unwrap()
            .borrowed_book_ids
    }

    #[tokio::test]
    async fn dune_scenario() {
        let (mut library, paul, dune) = setup(2).await;
        let rent = RentDto {
            member_id: paul.id,
            book_id: dune.id,
        };
        assert_eq!(available(&library, &dune), 2);

        library.borrow_book(rent).await.unwrap();
        library.borrow_book(rent).await.unwrap();
        assert_eq!(available(&library, &dune), 0);

        let saves = library.store.saves();
        assert_eq!(
            library.borrow_book(rent).await,
            Err(LoanRejection::NoCopiesAvailable)
        );
        assert_eq!(available(&library, &dune), 0);
        assert_eq!(loans(&library, &paul).len(), 2);
        assert_eq!(library.store.saves(), saves);

        library.return_book(rent).await.unwrap();
        assert_eq!(available(&library, &dune), 1);

        let emma = library
            .add_book(CreateBookDto {
                title: "Emma".to_string(),
                author: "Austen".to_string(),
                isbn: "ISBN2".to_string(),
                copies: 1,
            })
            .await;
        let saves = library.store.saves();
        let never = RentDto {
            member_id: paul.id,
            book_id: emma.id,
        };
        assert_eq!(
            library.return_book(never).await,
            Err(LoanRejection::NotBorrowed)
        );
        assert_eq!(available(&library, &dune), 1);
        assert_eq!(available(&library, &emma), 1);
        assert_eq!(library.store.saves(), saves);
    }

    #[tokio::test]
    async fn borrow_then_return_restores_everything() {
        let (mut library, paul, dune) = setup(1).await;
        let rent = RentDto {
            member_id: paul.id,
            book_id: dune.id,
        };

        library.borrow_book(rent).await.unwrap();
        assert_eq!(loans(&library, &paul), vec![dune.id]);
        library.return_book(rent).await.unwrap();

        assert!(loans(&library, &paul).is_empty());
        assert_eq!(available(&library, &dune), 1);
        assert_eq!(library.store.saved().unwrap().book_count(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_rejected_without_saving() {
        let (mut library, paul, dune) = setup(1).await;
        let saves = library.store.saves();

        let stranger = RentDto {
            member_id: Uuid::new_v4(),
            book_id: dune.id,
        };
        assert_eq!(
            library.borrow_book(stranger).await,
            Err(LoanRejection::UnknownMember)
        );
        let missing = RentDto {
            member_id: paul.id,
            book_id: Uuid::new_v4(),
        };
        assert_eq!(
            library.borrow_book(missing).await,
            Err(LoanRejection::UnknownBook)
        );
        assert_eq!(
            library.return_book(missing).await,
            Err(LoanRejection::UnknownBook)
        );

        assert_eq!(available(&library, &dune), 1);
        assert!(loans(&library, &paul).is_empty());
        assert_eq!(library.store.saves(), saves);
    }

    #[tokio::test]
    async fn failed_save_keeps_the_loan() {
        let (mut library, paul, dune) = setup(1).await;
        library.store.break_down();

        let rent = RentDto {
            member_id: paul.id,
            book_id: dune.id,
        };
        assert_eq!(library.borrow_book(rent).await, Ok(()));
        assert_eq!(available(&library, &dune), 0);
        assert_eq!(loans(&library, &paul), vec![dune.id]);
    }
}
