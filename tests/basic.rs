use cpc_lib::{
    config::{Config, OverflowPolicy},
    structures::variable::Variable,
    translate::Translator,
    types::err::{self},
};

fn formula_of(translator: &mut Translator, sentence: &str) -> String {
    translator.translate_to_formula(sentence).unwrap().to_string()
}

mod sentences {

    use super::*;

    #[test]
    fn atomic() {
        let mut the_translator = Translator::default();
        assert_eq!(formula_of(&mut the_translator, "Chove."), "A");
        assert_eq!(formula_of(&mut the_translator, "chove!"), "A");
        assert_eq!(formula_of(&mut the_translator, "  CHOVE  "), "A");
        assert_eq!(formula_of(&mut the_translator, "faz frio?"), "B");
    }

    #[test]
    fn negation() {
        let mut the_translator = Translator::default();
        assert_eq!(formula_of(&mut the_translator, "chove"), "A");
        assert_eq!(formula_of(&mut the_translator, "não chove"), "¬A");
        assert_eq!(formula_of(&mut the_translator, "Não neva."), "¬B");
    }

    #[test]
    fn conjunction() {
        let mut the_translator = Translator::default();
        assert_eq!(formula_of(&mut the_translator, "chove e faz frio"), "(A ∧ B)");

        let mappings = the_translator
            .all_mappings()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            mappings,
            vec![
                ("chove".to_string(), "A".to_string()),
                ("faz frio".to_string(), "B".to_string())
            ]
        );
    }

    #[test]
    fn disjunction() {
        let mut the_translator = Translator::default();
        assert_eq!(formula_of(&mut the_translator, "chove ou faz sol"), "(A ∨ B)");
    }

    #[test]
    fn implication() {
        let mut the_translator = Translator::default();
        assert_eq!(
            formula_of(&mut the_translator, "Se chove então a rua fica molhada."),
            "(A → B)"
        );
        assert_eq!(
            formula_of(&mut the_translator, "se chove e venta então faz frio"),
            "((A ∧ C) → D)"
        );
    }

    #[test]
    fn nesting() {
        let mut the_translator = Translator::default();
        assert_eq!(
            formula_of(&mut the_translator, "chove e faz frio ou neva"),
            "(A ∧ (B ∨ C))"
        );
        assert_eq!(formula_of(&mut the_translator, "a e b e c"), "((D ∧ E) ∧ F)");
    }

    #[test]
    fn biconditional_read_as_conjunction() {
        // "se e somente se" contains " e ", and conjunction is recognized first.
        let mut the_translator = Translator::default();
        assert_eq!(
            formula_of(&mut the_translator, "chove se e somente se há nuvens"),
            "(A ∧ B)"
        );
        assert_eq!(the_translator.registry().proposition_for("A"), "chove se");
        assert_eq!(
            the_translator.registry().proposition_for("B"),
            "somente se há nuvens"
        );
    }

    #[test]
    fn negation_found_anywhere() {
        // Negation is recognized first, wherever it is, and takes a single word.
        let mut the_translator = Translator::default();
        assert_eq!(formula_of(&mut the_translator, "chove e não faz frio"), "¬A");
        assert_eq!(the_translator.registry().proposition_for("A"), "faz");
    }

    #[test]
    fn empty() {
        let mut the_translator = Translator::default();
        for sentence in ["", "   ", "."] {
            let result = the_translator.translate_to_formula(sentence);
            assert_eq!(
                result.unwrap_err().cause(),
                &err::ErrorCause::EmptyProposition
            );
        }
        assert!(the_translator.registry().is_empty());
    }

    #[test]
    fn depth_limit() {
        let config = Config {
            max_depth: 2,
            ..Default::default()
        };
        let mut the_translator = Translator::from_config(config);
        assert!(the_translator.translate_to_formula("a e b e c").is_ok());

        let result = the_translator.translate_to_formula("a e b e c e d");
        assert_eq!(
            result.unwrap_err().cause(),
            &err::ErrorCause::DepthExceeded(2)
        );
    }
}

mod registry {

    use super::*;

    #[test]
    fn bijection() {
        let mut the_translator = Translator::default();
        let sentences = ["chove", "neva", "Chove", "faz frio", " NEVA ", "faz sol", "chove"];
        for sentence in sentences {
            assert!(the_translator.translate_to_formula(sentence).is_ok());
        }

        let mappings = the_translator.all_mappings().collect::<Vec<_>>();
        assert_eq!(mappings.len(), 4);
        for (index, (proposition, variable)) in mappings.iter().enumerate() {
            assert_eq!(*variable, Variable::new(index as u32));
            assert_eq!(
                the_translator.registry().variable_for(proposition),
                Some(*variable)
            );
        }
    }

    #[test]
    fn overflow_extends() {
        let mut the_translator = Translator::default();
        for index in 0..26 {
            assert!(the_translator.translate_to_formula(&format!("p{index}")).is_ok());
        }
        assert_eq!(formula_of(&mut the_translator, "p26 e p27"), "(AA ∧ AB)");
        assert_eq!(the_translator.translate_to_text("AB").unwrap(), "p27");
    }

    #[test]
    fn overflow_errors() {
        let config = Config {
            overflow: OverflowPolicy::Error,
            ..Default::default()
        };
        let mut the_translator = Translator::from_config(config);
        for index in 0..26 {
            assert!(the_translator.translate_to_formula(&format!("p{index}")).is_ok());
        }

        let result = the_translator.translate_to_formula("mais um");
        assert_eq!(
            result.unwrap_err().cause(),
            &err::ErrorCause::Registry(err::RegistryError::VariablesExhausted)
        );
        assert_eq!(formula_of(&mut the_translator, "p25"), "Z");
    }

    #[test]
    fn mapping_table() {
        let mut the_translator = Translator::default();
        assert!(the_translator.translate_to_formula("chove ou faz sol").is_ok());
        assert_eq!(
            the_translator.registry().to_string(),
            "'chove' → A\n'faz sol' → B\n"
        );
    }
}
