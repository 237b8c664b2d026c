//! Student (aluno) record and the request body used to create or overwrite one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A persisted student. `id` is assigned by the datastore; a zero-valued `Aluno`
/// (id 0, empty strings) stands for "no such record".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Aluno {
    pub id: i64,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub rg: String,
}

/// Body of create and update requests. Absent fields deserialize to empty strings,
/// so an update is a full overwrite rather than a merge. Any `id` in the body is ignored.
/// Only JSON objects are accepted; arrays would otherwise bind fields by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AlunoInput {
    pub name: String,
    pub cpf: String,
    pub rg: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct AlunoFields {
    name: String,
    cpf: String,
    rg: String,
}

impl TryFrom<Map<String, Value>> for AlunoInput {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let AlunoFields { name, cpf, rg } = serde_json::from_value(Value::Object(object))?;
        Ok(AlunoInput { name, cpf, rg })
    }
}

impl AlunoInput {
    pub fn into_aluno(self, id: i64) -> Aluno {
        Aluno {
            id,
            name: self.name,
            cpf: self.cpf,
            rg: self.rg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_labels() {
        let aluno = Aluno {
            id: 7,
            name: "Nome do aluno teste".into(),
            cpf: "12345678901".into(),
            rg: "123456789".into(),
        };
        assert_eq!(
            serde_json::to_value(&aluno).unwrap(),
            json!({"id": 7, "name": "Nome do aluno teste", "cpf": "12345678901", "rg": "123456789"})
        );
    }

    #[test]
    fn zero_valued_aluno_serializes_to_empty_fields() {
        assert_eq!(
            serde_json::to_value(Aluno::default()).unwrap(),
            json!({"id": 0, "name": "", "cpf": "", "rg": ""})
        );
    }

    #[test]
    fn input_missing_fields_become_empty() {
        let input: AlunoInput = serde_json::from_value(json!({"name": "Ana"})).unwrap();
        assert_eq!(input.name, "Ana");
        assert!(input.cpf.is_empty());
        assert!(input.rg.is_empty());
    }

    #[test]
    fn input_rejects_arrays() {
        assert!(serde_json::from_value::<AlunoInput>(json!([])).is_err());
        assert!(serde_json::from_value::<AlunoInput>(json!(["a", "b", "c"])).is_err());
    }

    #[test]
    fn input_rejects_wrongly_typed_fields() {
        assert!(serde_json::from_value::<AlunoInput>(json!({"name": 5})).is_err());
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: AlunoInput =
            serde_json::from_value(json!({"id": 99, "name": "Ana", "cpf": "1", "rg": "2"})).unwrap();
        assert_eq!(input.into_aluno(3).id, 3);
    }
}
