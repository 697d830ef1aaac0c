mod mock_transcription_engine_test;
