use roster_core::{merge_files, ErrorKind, MergeJob, NameCorrections};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn job(dir: &TempDir, guild: &str, meetup: &str) -> MergeJob {
    let guild = write_input(dir.path(), "guild.csv", guild);
    let meetup = write_input(dir.path(), "meetup.csv", meetup);
    MergeJob::new(guild, meetup, dir.path().join("out.csv"))
}

#[test]
fn merges_same_name_with_different_flags() {
    let dir = tempfile::tempdir().unwrap();
    let job = job(
        &dir,
        "first_name,last_name,attendance_status\nAna,García,attending_in_person\n",
        "Name,First name,Last name,RSVP\nAna Garcia,,,No\n",
    );

    let report = merge_files(&job).unwrap();

    assert_eq!(report.rows_written, 2);
    assert_eq!(report.guild_rows, 1);
    assert_eq!(report.meetup_rows, 1);
    assert_eq!(
        fs::read_to_string(&job.output).unwrap(),
        "name,in_person\nAna Garcia,true\nAna Garcia,false\n"
    );
}

#[test]
fn collapses_duplicates_across_sources() {
    let dir = tempfile::tempdir().unwrap();
    let job = job(
        &dir,
        "id,first_name,last_name,attendance_status\n\
         1,Renée,Zellweger,attending_in_person\n\
         2,john,SMITH,attending_online\n",
        "Name,First name,Last name,RSVP,Joined\n\
         Renee Zellweger,Renee,Zellweger,Yes,2024-01-01\n\
         J. Law,Jennifer,Lawrence,Yes,2024-01-02\n\
         dave.grohl.1011,,,Yes,2024-01-03\n",
    );

    let report = merge_files(&job).unwrap();

    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(
        fs::read_to_string(&job.output).unwrap(),
        "name,in_person\n\
         Dave Grohl,true\n\
         Jennifer Lawrence,true\n\
         John Smith,false\n\
         Renee Zellweger,true\n"
    );
}

#[test]
fn custom_corrections_replace_builtin_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut corrections = NameCorrections::empty();
    corrections.insert("Kk.Palmer", "Keke Palmer");

    let job = job(
        &dir,
        "first_name,last_name,attendance_status\n",
        "Name,First name,Last name,RSVP\nkk.palmer,,,Yes\nDave.Grohl.1011,,,No\n",
    )
    .with_corrections(corrections);

    merge_files(&job).unwrap();

    assert_eq!(
        fs::read_to_string(&job.output).unwrap(),
        "name,in_person\nDave.Grohl.1011,false\nKeke Palmer,true\n"
    );
}

#[test]
fn missing_guild_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let job = job(
        &dir,
        "first_name,last_name\nAna,García\n",
        "Name,First name,Last name,RSVP\nAna Garcia,,,Yes\n",
    );

    let err = merge_files(&job).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("attendance_status"));
    assert!(!job.output.exists());
}

#[test]
fn missing_meetup_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let job = job(
        &dir,
        "first_name,last_name,attendance_status\nAna,García,attending_in_person\n",
        "Name,First name,RSVP\nAna Garcia,Ana,Yes\n",
    );

    let err = merge_files(&job).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("Last name"));
    assert!(!job.output.exists());
}

#[test]
fn missing_input_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let meetup = write_input(dir.path(), "meetup.csv", "Name,First name,Last name,RSVP\n");
    let job = MergeJob::new(dir.path().join("absent.csv"), meetup, dir.path().join("out.csv"));

    let err = merge_files(&job).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputRead);
    assert!(err.to_string().contains("absent.csv"));
    assert!(!job.output.exists());
}

#[test]
fn unparseable_guild_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let guild = dir.path().join("guild.csv");
    let mut content = b"first_name,last_name,attendance_status\n".to_vec();
    content.extend_from_slice(b"Ana,Garc\xff\xfea,attending_in_person\n");
    fs::write(&guild, content).unwrap();
    let meetup = write_input(dir.path(), "meetup.csv", "Name,First name,Last name,RSVP\n");
    let job = MergeJob::new(guild, meetup, dir.path().join("out.csv"));

    let err = merge_files(&job).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputRead);
    assert!(!job.output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = job(
        &dir,
        "first_name,last_name,attendance_status\n",
        "Name,First name,Last name,RSVP\n",
    );
    job.output = dir.path().join("no-such-dir").join("out.csv");

    let err = merge_files(&job).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutputWrite);
}
