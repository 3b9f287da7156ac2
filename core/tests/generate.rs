use pretty_assertions::assert_eq;
use swagger_models_core::{
    generate_from_document, AppError, EmitterConfig, GeneratorConfig, ModelCategory, TypeTable,
};

const PETSTORE: &str = r##"
openapi: 3.0.0
info:
  title: Pet Store
  version: 1.0.0
paths: {}
components:
  schemas:
    Status:
      type: string
      enum: [active, inActive]
    Tag:
      type: object
      properties:
        name:
          type: string
        weight:
          type: number
    User:
      type: object
      properties:
        id:
          type: integer
          readOnly: true
        status:
          $ref: '#/components/schemas/Status'
        class:
          type: string
          nullable: true
        created:
          type: string
          format: date-time
    Shelf:
      type: object
      properties:
        tags:
          type: array
          items:
            $ref: '#/components/schemas/Tag'
        labels:
          type: array
          items:
            type: string
"##;

#[test]
fn test_generate_modules_from_openapi() {
    let (output, rendered) = generate_from_document(
        PETSTORE,
        &GeneratorConfig::default(),
        &EmitterConfig::default(),
    )
    .unwrap();

    let basic: Vec<&str> = output.catalog.basic.iter().map(|m| m.name.as_str()).collect();
    let complex: Vec<&str> = output.catalog.complex.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(basic, vec!["Status", "Tag"]);
    assert_eq!(complex, vec!["User", "Shelf"]);

    let expected_basic = r#"from enum import Enum
from datetime import datetime
from pydantic import BaseModel, Field


class CustomModel(BaseModel):
    class Config:
        allow_population_by_field_name = True
        arbitrary_types_allowed = True
        use_enum_values = True


class Status(str, Enum):
    ACTIVE = "active"
    IN_ACTIVE = "inActive"


class Tag(CustomModel):
    name: str
    weight: int
"#;

    let expected_complex = r#"from Files.BasicModels import *


class User(CustomModel):
    id: int = None
    status: Status
    class_: str = Field(None, alias="class")
    created: datetime


class Shelf(CustomModel):
    tags: list[Tag]
    labels: list[str]
"#;

    assert_eq!(rendered.basic, expected_basic);
    assert_eq!(rendered.complex, expected_complex);
}

#[test]
fn test_number_mapping_override() {
    let generator = GeneratorConfig {
        types: TypeTable::default().with_mapping("number", "float"),
        ..GeneratorConfig::default()
    };
    let (output, _) =
        generate_from_document(PETSTORE, &generator, &EmitterConfig::default()).unwrap();
    let (category, tag) = output.catalog.find("Tag").unwrap();
    assert_eq!(category, ModelCategory::Basic);
    assert_eq!(tag.members[1], "    weight: float");
}

#[test]
fn test_no_output_on_failure() {
    let broken = r#"
openapi: 3.0.0
components:
  schemas:
    Fine:
      type: object
      properties:
        a: { type: string }
    Shapeless:
      type: object
"#;
    let err = generate_from_document(broken, &GeneratorConfig::default(), &EmitterConfig::default())
        .unwrap_err();
    match err {
        AppError::SchemaShape { schema, .. } => assert_eq!(schema, "Shapeless"),
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_no_special_imports_for_plain_models() {
    let doc = r#"
openapi: 3.0.0
components:
  schemas:
    Plain:
      properties:
        flag: { type: boolean }
"#;
    let (output, rendered) =
        generate_from_document(doc, &GeneratorConfig::default(), &EmitterConfig::default())
            .unwrap();
    assert!(!output.imports.enum_support);
    assert!(!output.imports.datetime_support);
    assert!(rendered.basic.starts_with("from pydantic import BaseModel, Field\n"));
    assert_eq!(rendered.complex, "from Files.BasicModels import *\n");
}
