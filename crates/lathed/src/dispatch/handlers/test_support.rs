//! Shared test doubles for handler and router tests.

use mockall::mock;
use serde_json::Value;

use lathe_types::{
    Accuracy, AssembleInstructions, AssembleOutcome, FileInfo, InstanceList, Massprops,
    MaterialEntry, OpenInstructions, OpenOutcome, Transform,
};

use crate::engine::{CadEngine, EngineError};

use super::super::JsonMap;

/// Builds an input record from a `json!` object literal.
pub(crate) fn record(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object literal, got: {other}"),
    }
}

mock! {
    pub(crate) Engine {}

    impl CadEngine for Engine {
        fn open<'a>(
            &self,
            instructions: &OpenInstructions,
            session: Option<&'a str>,
        ) -> Result<Option<OpenOutcome>, EngineError>;

        fn open_errors<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<bool, EngineError>;

        fn rename<'a, 'b>(
            &self,
            file: Option<&'a str>,
            new_name: &str,
            only_session: bool,
            session: Option<&'b str>,
        ) -> Result<Option<String>, EngineError>;

        fn save<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            files: Option<&'b [String]>,
            session: Option<&'c str>,
        ) -> Result<(), EngineError>;

        fn backup<'a>(
            &self,
            file: &str,
            target_dir: &str,
            session: Option<&'a str>,
        ) -> Result<(), EngineError>;

        fn erase<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            files: Option<&'b [String]>,
            erase_children: bool,
            session: Option<&'c str>,
        ) -> Result<(), EngineError>;

        fn erase_not_displayed<'a>(&self, session: Option<&'a str>) -> Result<(), EngineError>;

        fn regenerate<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            files: Option<&'b [String]>,
            display: bool,
            session: Option<&'c str>,
        ) -> Result<(), EngineError>;

        fn refresh<'a, 'b>(&self, file: Option<&'a str>, session: Option<&'b str>) -> Result<(), EngineError>;

        fn repaint<'a, 'b>(&self, file: Option<&'a str>, session: Option<&'b str>) -> Result<(), EngineError>;

        fn display<'a>(
            &self,
            file: &str,
            activate: bool,
            session: Option<&'a str>,
        ) -> Result<(), EngineError>;

        fn close_window<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<(), EngineError>;

        fn get_active<'a>(&self, session: Option<&'a str>) -> Result<Option<OpenOutcome>, EngineError>;

        fn is_active<'a>(&self, file: &str, session: Option<&'a str>) -> Result<bool, EngineError>;

        fn list<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            files: Option<&'b [String]>,
            session: Option<&'c str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn exists<'a>(&self, file: &str, session: Option<&'a str>) -> Result<bool, EngineError>;

        fn get_fileinfo<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<FileInfo>, EngineError>;

        fn get_relations<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn set_relations<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            relations: Option<&'b [String]>,
            session: Option<&'c str>,
        ) -> Result<(), EngineError>;

        fn get_postregen_relations<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn set_postregen_relations<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            relations: Option<&'b [String]>,
            session: Option<&'c str>,
        ) -> Result<(), EngineError>;

        fn has_instances<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<bool, EngineError>;

        fn list_instances<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<InstanceList>, EngineError>;

        fn massprops<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<Massprops>, EngineError>;

        fn get_length_units<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<String>, EngineError>;

        fn get_mass_units<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<String>, EngineError>;

        fn set_length_units<'a, 'b>(
            &self,
            file: Option<&'a str>,
            units: &str,
            convert: bool,
            session: Option<&'b str>,
        ) -> Result<(), EngineError>;

        fn set_mass_units<'a, 'b>(
            &self,
            file: Option<&'a str>,
            units: &str,
            convert: bool,
            session: Option<&'b str>,
        ) -> Result<(), EngineError>;

        fn get_unit_system<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<String>, EngineError>;

        fn set_unit_system<'a, 'b>(
            &self,
            file: Option<&'a str>,
            name: &str,
            convert: bool,
            session: Option<&'b str>,
        ) -> Result<(), EngineError>;

        fn create_unit_system<'a, 'b, 'c, 'd, 'e, 'f>(
            &self,
            file: Option<&'a str>,
            name: &str,
            mass: bool,
            unit_mass_force: Option<&'b str>,
            unit_length: Option<&'c str>,
            unit_time: Option<&'d str>,
            unit_temp: Option<&'e str>,
            session: Option<&'f str>,
        ) -> Result<(), EngineError>;

        fn assemble<'a>(
            &self,
            instructions: &AssembleInstructions,
            session: Option<&'a str>,
        ) -> Result<Option<AssembleOutcome>, EngineError>;

        fn get_transform<'a, 'b, 'c, 'd>(
            &self,
            asm: Option<&'a str>,
            path: Option<&'b [i32]>,
            csys: Option<&'c str>,
            session: Option<&'d str>,
        ) -> Result<Option<Transform>, EngineError>;

        fn list_simp_reps<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            rep: Option<&'b str>,
            session: Option<&'c str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn get_current_material<'a, 'b>(
            &self,
            file: Option<&'a str>,
            include_non_matching: bool,
            session: Option<&'b str>,
        ) -> Result<Option<Vec<MaterialEntry>>, EngineError>;

        fn set_current_material<'a, 'b>(
            &self,
            file: Option<&'a str>,
            material: &str,
            session: Option<&'b str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn list_materials<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            material: Option<&'b str>,
            include_non_matching: bool,
            session: Option<&'c str>,
        ) -> Result<Option<Vec<MaterialEntry>>, EngineError>;

        fn load_material_file<'a, 'b, 'c>(
            &self,
            file: Option<&'a str>,
            dirname: Option<&'b str>,
            material: &str,
            session: Option<&'c str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn delete_material<'a, 'b>(
            &self,
            file: Option<&'a str>,
            material: &str,
            session: Option<&'b str>,
        ) -> Result<Option<Vec<String>>, EngineError>;

        fn get_accuracy<'a, 'b>(
            &self,
            file: Option<&'a str>,
            session: Option<&'b str>,
        ) -> Result<Option<Accuracy>, EngineError>;
    }
}
