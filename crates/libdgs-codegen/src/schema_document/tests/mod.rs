mod schema_document_tests;
