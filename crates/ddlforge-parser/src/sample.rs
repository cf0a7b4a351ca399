//! Sample DDL used to seed an empty editor

/// An Oracle-style `CREATE TABLE` with trailing `COMMENT ON` statements.
///
/// Parses to table `Sample_table` with six columns, `ID` being the only key.
pub fn sample_ddl() -> &'static str {
    "CREATE TABLE SAMPLE_TABLE (
    ID NUMBER(10) PRIMARY KEY,
    NAME VARCHAR2(100) NOT NULL,
    EMAIL VARCHAR2(200),
    PHONE VARCHAR2(20),
    CREATED_DATE DATE DEFAULT SYSDATE,
    UPDATED_DATE DATE
);

-- Add comments
COMMENT ON TABLE SAMPLE_TABLE IS 'Sample table for CRUD generation';
COMMENT ON COLUMN SAMPLE_TABLE.ID IS 'Primary key';
COMMENT ON COLUMN SAMPLE_TABLE.NAME IS 'User name';
COMMENT ON COLUMN SAMPLE_TABLE.EMAIL IS 'Email address';"
}
