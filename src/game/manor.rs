//! The fixed case: the manor map and its clue/suspect data
//!
//! One self-contained builder assembles the whole case. The clue texts
//! double as lookup keys in the suspect index, so they must match the
//! room data byte for byte.

use crate::data::{Room, SuspectIndex};

/// A complete case: the map to explore and who each clue implicates
#[derive(Debug)]
pub struct Case {
    pub title: String,
    pub briefing: String,
    pub manor: Room,
    pub suspects: SuspectIndex,
}

/// Create the classic manor case
pub fn create_manor_case() -> Case {
    let manor = Room::new("Hall de Entrada")
        .left(
            Room::with_clue("Sala de Estar", "pegada no tapete")
                .left(Room::with_clue("Cozinha", "faca com digitais"))
                .right(Room::new("Jardim").left(Room::with_clue("Estufa", "pegada molhada"))),
        )
        .right(
            Room::with_clue("Biblioteca", "página arrancada do livro")
                .left(Room::with_clue("Sala de Jantar", "vidro quebrado"))
                .right(
                    Room::with_clue("Escritório", "bilhete rasgado")
                        .right(Room::with_clue("Quarto do Dono", "chave perdida")),
                ),
        );

    let mut suspects = SuspectIndex::new();
    suspects.insert("pegada no tapete", "Carlos");
    suspects.insert("página arrancada do livro", "Mariana");
    suspects.insert("faca com digitais", "Carlos");
    suspects.insert("vidro quebrado", "Luisa");
    suspects.insert("bilhete rasgado", "Mariana");
    suspects.insert("pegada molhada", "Carlos");
    suspects.insert("chave perdida", "Luisa");

    Case {
        title: "Detective Quest".to_string(),
        briefing: "A crime was committed in the manor last night. Walk its rooms, \
gather every clue you can find, and when you have seen enough, accuse a suspect."
            .to_string(),
        manor,
        suspects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Direction::{Left, Right};

    #[test]
    fn manor_topology_matches_the_case() {
        let case = create_manor_case();
        let hall = &case.manor;
        assert_eq!(hall.name(), "Hall de Entrada");
        assert_eq!(hall.clue(), None);

        let estar = hall.child(Left).unwrap();
        assert_eq!(estar.name(), "Sala de Estar");
        assert_eq!(estar.clue(), Some("pegada no tapete"));

        let cozinha = estar.child(Left).unwrap();
        assert_eq!(cozinha.name(), "Cozinha");
        assert_eq!(cozinha.clue(), Some("faca com digitais"));
        assert!(cozinha.is_leaf());

        let jardim = estar.child(Right).unwrap();
        assert_eq!(jardim.name(), "Jardim");
        assert_eq!(jardim.clue(), None);

        let estufa = jardim.child(Left).unwrap();
        assert_eq!(estufa.name(), "Estufa");
        assert_eq!(estufa.clue(), Some("pegada molhada"));
        assert!(estufa.is_leaf());

        let biblioteca = hall.child(Right).unwrap();
        assert_eq!(biblioteca.name(), "Biblioteca");
        assert_eq!(biblioteca.clue(), Some("página arrancada do livro"));

        let jantar = biblioteca.child(Left).unwrap();
        assert_eq!(jantar.name(), "Sala de Jantar");
        assert_eq!(jantar.clue(), Some("vidro quebrado"));
        assert!(jantar.is_leaf());

        let escritorio = biblioteca.child(Right).unwrap();
        assert_eq!(escritorio.name(), "Escritório");
        assert_eq!(escritorio.clue(), Some("bilhete rasgado"));
        assert!(escritorio.child(Left).is_none());

        let quarto = escritorio.child(Right).unwrap();
        assert_eq!(quarto.name(), "Quarto do Dono");
        assert_eq!(quarto.clue(), Some("chave perdida"));
        assert!(quarto.is_leaf());
    }

    #[test]
    fn every_clue_implicates_its_suspect() {
        let case = create_manor_case();
        let pairs = [
            ("pegada no tapete", "Carlos"),
            ("página arrancada do livro", "Mariana"),
            ("faca com digitais", "Carlos"),
            ("vidro quebrado", "Luisa"),
            ("bilhete rasgado", "Mariana"),
            ("pegada molhada", "Carlos"),
            ("chave perdida", "Luisa"),
        ];
        for (clue, suspect) in pairs {
            assert_eq!(case.suspects.lookup(clue), Some(suspect), "clue: {clue}");
        }
        assert_eq!(case.suspects.len(), 7);
    }
}
