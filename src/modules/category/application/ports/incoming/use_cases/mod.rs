mod create_category;
mod delete_category;
mod get_categories;
mod update_category;

pub use create_category::{
    CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError,
    CreateCategoryUseCase,
};
pub use delete_category::{DeleteCategoryError, DeleteCategoryUseCase};
pub use get_categories::{
    GetCategoriesError, GetCategoriesUseCase, GetCategoryError, GetCategoryUseCase,
};
pub use update_category::{
    UpdateCategoryCommand, UpdateCategoryCommandError, UpdateCategoryError,
    UpdateCategoryUseCase,
};
