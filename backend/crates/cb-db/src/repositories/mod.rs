pub mod output_repository;
