use serde::{Deserialize, Deserializer, Serialize};

use super::ReviewStatus;

/// Bucket used when a proposal has no requesting coordinator.
pub const NO_COORDINATOR: &str = "Sem Coordenador";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "coordenadorSolicitante", default, deserialize_with = "null_as_default")]
    pub requesting_coordinator: String,
    #[serde(rename = "coordenadores", default, deserialize_with = "null_as_default")]
    pub coordinators: Vec<Coordinator>,
    #[serde(rename = "apresentacao", default, deserialize_with = "null_as_default")]
    pub presentation: String,
    #[serde(rename = "publico", default, deserialize_with = "null_as_default")]
    pub audience: String,
    #[serde(rename = "concorrentesIA", default, deserialize_with = "null_as_default")]
    pub competitors: Vec<Competitor>,
    #[serde(rename = "disciplinasIA", default, deserialize_with = "null_as_default")]
    pub disciplines: Vec<Discipline>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performance: String,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(rename = "observacoesComite", default, deserialize_with = "null_as_default")]
    pub committee_notes: String,
    #[serde(rename = "cargaHoraria", default)]
    pub workload_hours: Option<f64>,
}

impl Course {
    /// Sum of the discipline workloads. Independent of `workload_hours`, which the
    /// catalog may send precomputed and is never reconciled with this value.
    pub fn total_workload(&self) -> f64 {
        self.disciplines.iter().map(|d| d.workload).sum()
    }

    pub fn requester_bucket(&self) -> &str {
        let name = self.requesting_coordinator.trim();
        if name.is_empty() { NO_COORDINATOR } else { self.requesting_coordinator.as_str() }
    }

    pub fn has_requester(&self) -> bool {
        !self.requesting_coordinator.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinator {
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "minibiografia", default, deserialize_with = "null_as_default")]
    pub biography: String,
    /// Active institutional coordinator, as opposed to someone who only proposed the course.
    #[serde(rename = "jaECoordenador", default, deserialize_with = "null_as_default")]
    pub is_coordinator: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(rename = "instituicao", default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(rename = "curso", default, deserialize_with = "null_as_default")]
    pub course: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(rename = "valor", default, deserialize_with = "null_as_default")]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Discipline {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "carga")]
    pub workload: f64,
}

/// Reads `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Older catalog entries list disciplines as bare names.
#[derive(Deserialize)]
#[serde(untagged)]
enum DisciplineRepr {
    Name(String),
    Full {
        #[serde(default, deserialize_with = "null_as_default")]
        nome: String,
        #[serde(default)]
        carga: Option<f64>,
    },
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match DisciplineRepr::deserialize(deserializer)? {
            DisciplineRepr::Name(name) => Discipline { name, workload: 0.0 },
            DisciplineRepr::Full { nome, carga } => Discipline {
                name: nome,
                workload: carga.unwrap_or(0.0),
            },
        })
    }
}
