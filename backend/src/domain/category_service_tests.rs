//! Tests for the category service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCategoryRepository, MockItemRepository};
use crate::domain::{CategoryName, ErrorCode, ItemId};

fn category(name: &str) -> Category {
    Category::new(
        CategoryId::random(),
        CategoryName::new(name).expect("valid name"),
    )
}

fn service(
    categories: MockCategoryRepository,
    items: MockItemRepository,
) -> CategoryService<MockCategoryRepository, MockItemRepository> {
    CategoryService::new(Arc::new(categories), Arc::new(items))
}

#[fixture]
fn fiction() -> Category {
    category("Fiction")
}

#[tokio::test]
async fn list_renders_repository_order() {
    let sorted = vec![category("Drama"), category("Fiction"), category("Poetry")];
    let expected = sorted.clone();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list_sorted_by_name()
        .times(1)
        .return_once(move || Ok(sorted));

    let outcome = service(categories, MockItemRepository::new())
        .list_categories()
        .await
        .expect("list succeeds");

    assert_eq!(
        outcome,
        CategoryOutcome::Render(View::CategoryList {
            title: LIST_TITLE,
            categories: expected,
        })
    );
}

#[rstest]
#[tokio::test]
async fn detail_joins_category_and_items(fiction: Category) {
    let id = *fiction.id();
    let item = Item::new(ItemId::random(), "Dune", id);
    let (found, listed) = (fiction.clone(), vec![item.clone()]);

    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(move |_| Ok(Some(found)));
    let mut items = MockItemRepository::new();
    items
        .expect_find_by_category()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(move |_| Ok(listed));

    let outcome = service(categories, items)
        .category_detail(&id)
        .await
        .expect("detail succeeds");

    assert_eq!(
        outcome,
        CategoryOutcome::Render(View::CategoryDetail {
            title: DETAIL_TITLE,
            category: fiction,
            items: vec![item],
        })
    );
}

#[tokio::test]
async fn detail_of_absent_category_is_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_id().return_once(|_| Ok(None));
    let mut items = MockItemRepository::new();
    items.expect_find_by_category().return_once(|_| Ok(Vec::new()));

    let error = service(categories, items)
        .category_detail(&CategoryId::random())
        .await
        .expect_err("absent category");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn detail_forwards_first_read_failure() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .return_once(|_| Err(CategoryRepositoryError::connection("pool exhausted")));
    let mut items = MockItemRepository::new();
    items.expect_find_by_category().returning(|_| Ok(Vec::new()));

    let error = service(categories, items)
        .category_detail(&CategoryId::random())
        .await
        .expect_err("read failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case("")]
#[case("    ")]
#[tokio::test]
async fn create_with_blank_name_never_persists(#[case] raw: &str) {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_name().times(0);
    categories.expect_save().times(0);

    let outcome = service(categories, MockItemRepository::new())
        .create_category(CategorySubmission::from_raw(raw))
        .await
        .expect("re-render");

    let CategoryOutcome::Render(View::CategoryForm { title, errors, .. }) = outcome else {
        panic!("expected form re-render, got {outcome:?}");
    };
    assert_eq!(title, CREATE_TITLE);
    assert_eq!(errors, vec![FieldError::new("name", CREATE_NAME_REQUIRED, "")]);
}

#[rstest]
#[tokio::test]
async fn create_with_existing_name_redirects_without_insert(fiction: Category) {
    let expected_location = fiction.url();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_name()
        .withf(|name| name.as_ref() == "Fiction")
        .times(1)
        .return_once(move |_| Ok(Some(fiction)));
    categories.expect_save().times(0);

    let outcome = service(categories, MockItemRepository::new())
        .create_category(CategorySubmission::from_raw(" Fiction "))
        .await
        .expect("redirect");

    assert_eq!(outcome, CategoryOutcome::Redirect(expected_location));
}

#[tokio::test]
async fn create_saves_escaped_name_and_redirects_to_it() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_name().return_once(|_| Ok(None));
    categories
        .expect_save()
        .withf(|category| category.name().as_ref() == "Sci-Fi &amp; Fantasy")
        .times(1)
        .return_once(|_| Ok(()));

    let outcome = service(categories, MockItemRepository::new())
        .create_category(CategorySubmission::from_raw("Sci-Fi & Fantasy"))
        .await
        .expect("redirect");

    let CategoryOutcome::Redirect(location) = outcome else {
        panic!("expected redirect, got {outcome:?}");
    };
    let id = location
        .strip_prefix("/categories/")
        .expect("detail location");
    assert!(CategoryId::new(id).is_ok());
}

#[tokio::test]
async fn create_forwards_save_failure() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_name().return_once(|_| Ok(None));
    categories
        .expect_save()
        .return_once(|_| Err(CategoryRepositoryError::query("insert failed")));

    let error = service(categories, MockItemRepository::new())
        .create_category(CategorySubmission::from_raw("Poetry"))
        .await
        .expect_err("save failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn delete_is_blocked_while_items_reference_category(fiction: Category) {
    let id = *fiction.id();
    let item = Item::new(ItemId::random(), "Dune", id);
    let (found, listed) = (fiction.clone(), vec![item.clone()]);

    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(found)));
    categories.expect_delete_by_id().times(0);
    let mut items = MockItemRepository::new();
    items
        .expect_find_by_category()
        .return_once(move |_| Ok(listed));

    let outcome = service(categories, items)
        .delete_category(&id)
        .await
        .expect("re-render");

    assert_eq!(
        outcome,
        CategoryOutcome::Render(View::CategoryDelete {
            title: DELETE_TITLE,
            category: Some(fiction),
            items: vec![item],
        })
    );
}

#[rstest]
#[tokio::test]
async fn delete_without_items_removes_and_redirects_to_list(fiction: Category) {
    let id = *fiction.id();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(fiction)));
    categories
        .expect_delete_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(|_| Ok(()));
    let mut items = MockItemRepository::new();
    items.expect_find_by_category().return_once(|_| Ok(Vec::new()));

    let outcome = service(categories, items)
        .delete_category(&id)
        .await
        .expect("redirect");

    assert_eq!(
        outcome,
        CategoryOutcome::Redirect(CATEGORY_LIST_PATH.to_owned())
    );
}

#[tokio::test]
async fn delete_forwards_item_read_failure_without_deleting() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_id().returning(|_| Ok(None));
    categories.expect_delete_by_id().times(0);
    let mut items = MockItemRepository::new();
    items
        .expect_find_by_category()
        .return_once(|_| Err(ItemRepositoryError::query("scan failed")));

    let error = service(categories, items)
        .delete_category(&CategoryId::random())
        .await
        .expect_err("read failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn delete_confirmation_for_absent_category_redirects_to_list() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_id().return_once(|_| Ok(None));
    let mut items = MockItemRepository::new();
    items.expect_find_by_category().return_once(|_| Ok(Vec::new()));

    let outcome = service(categories, items)
        .delete_confirmation(&CategoryId::random())
        .await
        .expect("redirect");

    assert_eq!(
        outcome,
        CategoryOutcome::Redirect(CATEGORY_LIST_PATH.to_owned())
    );
}

#[rstest]
#[tokio::test]
async fn edit_form_is_prepopulated(fiction: Category) {
    let id = *fiction.id();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(fiction)));

    let outcome = service(categories, MockItemRepository::new())
        .edit_form(&id)
        .await
        .expect("form");

    assert_eq!(
        outcome,
        CategoryOutcome::Render(View::CategoryForm {
            title: UPDATE_TITLE,
            category: Some(CategoryFormValues {
                id: Some(id),
                name: "Fiction".to_owned(),
            }),
            categories: None,
            errors: Vec::new(),
        })
    );
}

#[tokio::test]
async fn edit_form_of_absent_category_is_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_find_by_id().return_once(|_| Ok(None));

    let error = service(categories, MockItemRepository::new())
        .edit_form(&CategoryId::random())
        .await
        .expect_err("absent category");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_with_blank_name_rerenders_with_every_category(fiction: Category) {
    let id = CategoryId::random();
    let all = vec![fiction];
    let expected = all.clone();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list_sorted_by_name()
        .times(1)
        .return_once(move || Ok(all));
    categories.expect_update_by_id().times(0);

    let outcome = service(categories, MockItemRepository::new())
        .update_category(&id, CategorySubmission::from_raw(" "))
        .await
        .expect("re-render");

    assert_eq!(
        outcome,
        CategoryOutcome::Render(View::CategoryForm {
            title: UPDATE_TITLE,
            category: Some(CategoryFormValues {
                id: Some(id),
                name: String::new(),
            }),
            categories: Some(expected),
            errors: vec![FieldError::new("name", UPDATE_NAME_REQUIRED, "")],
        })
    );
}

#[rstest]
#[tokio::test]
async fn update_replaces_name_keyed_by_path_id(fiction: Category) {
    let id = *fiction.id();
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_update_by_id()
        .withf(move |candidate| *candidate.id() == id && candidate.name().as_ref() == "Novels")
        .times(1)
        .returning(|candidate| Ok(Some(candidate.clone())));

    let outcome = service(categories, MockItemRepository::new())
        .update_category(&id, CategorySubmission::from_raw("Novels"))
        .await
        .expect("redirect");

    assert_eq!(outcome, CategoryOutcome::Redirect(format!("/categories/{id}")));
}

#[tokio::test]
async fn update_of_absent_category_is_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_update_by_id().return_once(|_| Ok(None));

    let error = service(categories, MockItemRepository::new())
        .update_category(&CategoryId::random(), CategorySubmission::from_raw("Novels"))
        .await
        .expect_err("absent category");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
